//! Built-in ASCII art tables.
//!
//! Ids are short fixed slugs and must stay unique across all categories.

/// Static definition of a built-in category: `(id, name, art)` per item
pub(super) struct CategoryDef {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub items: &'static [(&'static str, &'static str, &'static str)],
}

pub(super) static CATEGORIES: &[CategoryDef] = &[
    EMOTICONS, ANIMALS, REACTIONS, SYMBOLS, DIVIDERS, ART, TEXT,
];

const EMOTICONS: CategoryDef = CategoryDef {
    id: "emoticons",
    name: "Emoticons",
    icon: "face.smiling",
    items: &[
        ("shrug", "Shrug", "¯\\_(ツ)_/¯"),
        ("flip", "Table Flip", "(╯°□°）╯︵ ┻━┻"),
        ("unflip", "Table Unflip", "┬──┬ ノ( ゜-゜ノ)"),
        ("lenny", "Lenny Face", "( ͡° ͜ʖ ͡°)"),
        ("disapprove", "Disapproval", "ಠ_ಠ"),
        ("happy", "Happy", "(◕‿◕)"),
        ("cry", "Crying", "(╥﹏╥)"),
        ("wink", "Wink", "(｡•̀ᴗ-)✧"),
        ("omg", "OMG", "ヽ(°〇°)ﾉ"),
        ("hug", "Hug", "(づ｡◕‿‿◕｡)づ"),
        ("fight", "Fight Me", "(ง'̀-'́)ง"),
        ("dance", "Dance", "ヾ(⌐■_■)ノ♪"),
        ("cool", "Deal With It", "(•_•) ( •_•)>⌐■-■ (⌐■_■)"),
        ("celebrate", "Celebrate", "٩(◕‿◕｡)۶"),
        ("angry", "Angry", "щ(ಠ益ಠщ)"),
        ("love", "Love", "(ɔ◔‿◔)ɔ ♥"),
        ("confused", "Confused", "(•ิ_•ิ)?"),
        ("meh", "Meh", "¯\\(°_o)/¯"),
        ("bow", "Bow", "m(_ _)m"),
        ("sparkle", "Sparkle", "(ﾉ◕ヮ◕)ﾉ*:･ﾟ✧"),
    ],
};

const ANIMALS: CategoryDef = CategoryDef {
    id: "animals",
    name: "Animals",
    icon: "pawprint.fill",
    items: &[
        ("cat1", "Cat", "(=^･ω･^=)"),
        ("cat2", "Cat Waving", "(^._.^)ﾉ"),
        ("bear", "Bear", "ʕ•ᴥ•ʔ"),
        ("dog", "Dog", "V•ᴥ•V"),
        ("bunny", "Bunny", "(\\_/)\n(='.'=)\n(\")_(\")"),
        ("fish", "Fish", "<°)))))><"),
        ("owl", "Owl", "(◉ o ◉)"),
        ("penguin", "Penguin", "( ˘▽˘)っ♨"),
        ("shark", "Shark", "( •_•)O*¯`·.¸.·´¯`°Q(•_• )"),
        ("spider", "Spider", "/\\(oo)/\\"),
        ("bird", "Bird", "ᕙ(⇀‸↼‶)ᕗ"),
        ("snail", "Snail", "@'---,---"),
        ("cow", "Cow", "(^(oo)^)"),
        ("monkey", "Monkey", "@(*o*)@"),
    ],
};

const REACTIONS: CategoryDef = CategoryDef {
    id: "reactions",
    name: "Reactions",
    icon: "hand.thumbsup.fill",
    items: &[
        ("yes", "Yes!", "(•̀ᴗ•́)و ̑̑"),
        ("no", "Nope", "ᕙ(⇀‸↼‶)ᕗ"),
        ("facepalm", "Facepalm", "(－‸ლ)"),
        ("mindblown", "Mind Blown", "(╯°□°）╯ ︵ 🤯"),
        ("slowclap", "Slow Clap", "( •_•)\n( •_•)>⌐■-■\n(⌐■_■)"),
        ("thumbsup", "Thumbs Up", "（ﾉ´∀｀）ﾉ"),
        ("wave", "Wave", "( ˘ ³˘)♥"),
        ("notbad", "Not Bad", "( ͡~ ͜ʖ ͡°)"),
        ("run", "Running", "ᕕ( ᐛ )ᕗ"),
        ("jazz", "Jazz Hands", "\\(^O^)/"),
        ("muscles", "Flexing", "ᕦ(ò_óˇ)ᕤ"),
        ("ghost", "Spooked", "( º_º)"),
        ("cry2", "Sobbing", "(;´༎ຶД༎ຶ`)"),
    ],
};

const SYMBOLS: CategoryDef = CategoryDef {
    id: "symbols",
    name: "Symbols",
    icon: "sparkles",
    items: &[
        ("heart", "Heart", "♥"),
        ("hearts", "Hearts", "♡ ♥ ♡ ♥ ♡"),
        ("stars", "Stars", "★ ☆ ★ ☆ ★"),
        ("sparkles", "Sparkles", "✦ ✧ ✦ ✧ ✦"),
        ("music", "Music Notes", "♩ ♪ ♫ ♬ ♭ ♮ ♯"),
        ("suits", "Card Suits", "♥ ♦ ♣ ♠"),
        ("blocks", "Blocks", "░ ▒ ▓ █ ▓ ▒ ░"),
        ("arrows", "Arrows", "← ↑ → ↓ ↔ ↕"),
        ("crown", "Crown", "♛"),
        ("snowflake", "Snowflake", "❄ ❅ ❆"),
        ("lightning", "Lightning", "⚡ ⚡ ⚡"),
        ("infinity", "Infinity", "∞"),
        ("peace", "Peace", "☮"),
        ("yinyang", "Yin Yang", "☯"),
        ("skull", "Skull", "☠"),
        ("checkmark", "Check", "✓"),
        ("cross", "Cross", "✗"),
        ("flower", "Flower", "✿"),
    ],
};

const DIVIDERS: CategoryDef = CategoryDef {
    id: "dividers",
    name: "Dividers",
    icon: "minus",
    items: &[
        ("div1", "Simple Line", "─────────────────────"),
        ("div2", "Double Line", "═════════════════════"),
        ("div3", "Star Line", "★──────────────────────★"),
        ("div4", "Wavy", "〜〜〜〜〜〜〜〜〜〜〜〜"),
        ("div5", "Dotted", "· · · · · · · · · · · ·"),
        ("div6", "Hearts", "♥─♥─♥─♥─♥─♥─♥─♥─♥"),
        ("div7", "Decorated", "~•✦•~•✦•~•✦•~•✦•~"),
        ("div8", "Bracket", "«──────────────────────»"),
        ("div9", "Floral", "❀ ✿ ❀ ✿ ❀ ✿ ❀ ✿ ❀"),
        ("div10", "Bold", "▬▬▬▬▬▬▬▬▬▬▬▬▬▬"),
        ("div11", "Dash Dot", "─ · ─ · ─ · ─ · ─ · ─"),
        ("div12", "Chevron", "»»»»»»»»»»»»»»»»»»»»"),
        ("div13", "Diamonds", "◇ ◆ ◇ ◆ ◇ ◆ ◇ ◆ ◇"),
        ("div14", "Tilde Stars", "~*~*~*~*~*~*~*~*~*~*~"),
    ],
};

const ART: CategoryDef = CategoryDef {
    id: "art",
    name: "Art",
    icon: "paintbrush.fill",
    items: &[
        ("rose", "Rose", "@}->--"),
        ("butterfly", "Butterfly", "ɛ>-<ɜ"),
        ("explosion", "Explosion", "*°•.¸¸.•°*°•.¸¸.•°*"),
        ("spaceship", "Space Ship", ">>=====>"),
        ("sword", "Sword", "†───────────────"),
        ("arrow", "Fancy Arrow", "─────────────►"),
        ("trophy", "Trophy", "( trophy )"),
        ("mountain", "Mountain", "  /\\  /\\\n /  \\/  \\"),
        ("sun", "Sun", " \\  |  /\n──(☀)──\n /  |  \\"),
        ("heart_art", "Heart Art", "♥♥♥  ♥♥♥\n♥♥♥♥♥♥♥\n ♥♥♥♥♥\n  ♥♥♥\n   ♥"),
        ("shooting_star", "Shooting Star", "★彡"),
        ("magic", "Magic", "°꒰˃͈꒵˂͈꒱°✧"),
    ],
};

const TEXT: CategoryDef = CategoryDef {
    id: "text",
    name: "Text",
    icon: "textformat",
    items: &[
        ("hi", "Hi", "( ´ ▽ ` )ﾉ Hi!"),
        ("bye", "Bye", "( ´ ▽ ` )ﾉ Bye!"),
        ("goodmorning", "Good Morning", "☀ Good Morning! ☀"),
        ("goodnight", "Good Night", "🌙 Good Night ★"),
        ("loveyou", "Love You", "I ♥ U"),
        ("hbd", "Happy Birthday", "♩♪ Happy Birthday ♪♩"),
        ("lol", "LOL", "(≧∇≦)/ LOL"),
        ("omglol", "OMG LOL", "OMG (o_O) LOL (≧▽≦)"),
        ("shhh", "Shh", "(~˘▾˘)~ ♪ shhh ♪"),
        ("nope", "Nope", "ᕙ(⇀‸↼‶)ᕗ Nope."),
        ("yolo", "YOLO", "ᕦ(ò_óˇ)ᕤ YOLO"),
        ("brb", "BRB", "ᕕ( ᐛ )ᕗ BRB"),
    ],
};
