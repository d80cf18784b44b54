/// Fantasy book blurbs used as a default training corpus.
pub const SAMPLE_CORPUS: &str = "
The brave young warrior embarked on a perilous journey to save the kingdom.
Against all odds, she fought against ancient evil forces that threatened the land.
The magical sword glowed with power as she faced the dark sorcerer in battle.

A tale of love and adventure unfolds in the mystical realm of dragons and wizards.
The prince must rescue the princess from the tower where she has been imprisoned.
Evil creatures lurk in the shadows, waiting to prevent the hero from succeeding.

In a world where magic is forbidden, a young girl discovers her hidden powers.
She must learn to control her abilities while avoiding the king's guards.
The fate of the kingdom rests in her hands as she prepares for the final confrontation.

Two unlikely friends join forces to defeat the tyrant who rules their homeland.
Their adventure takes them through dangerous forests and treacherous mountains.
Only together can they hope to restore peace to their war-torn country.

The last surviving member of an ancient order seeks revenge against those who betrayed her people.
Armed with legendary weapons and forgotten spells, she begins her quest for justice.
Dark secrets from the past threaten to consume her as she walks the path of vengeance.
";
