//! Compiled-in word lists
//!
//! Answers are the curated pools rounds draw from; the dictionary extras
//! widen what counts as an accepted guess without ever being drawn as an
//! answer. Everything is uppercase.

pub const ANSWERS_4: &[&str] = &[
    "ABLE", "ACID", "AREA", "ARMY", "BABY", "BACK", "BALL", "BAND", "BANK", "BASE",
    "BATH", "BEAR", "BEAT", "BELL", "BELT", "BIRD", "BLUE", "BOAT", "BODY", "BONE",
    "BOOK", "BURN", "BUSH", "CAKE", "CALM", "CARD", "CARE", "CASH", "CAST", "CITY",
    "CLAY", "COAL", "COAT", "CODE", "COLD", "COOK", "COOL", "CORN", "DARK", "DATE",
    "DEAL", "DEEP", "DESK", "DOOR", "DUST", "EAST", "EASY", "EDGE", "FACE", "FACT",
    "FARM", "FAST", "FEAR", "FILM", "FIND", "FINE", "FIRE", "FISH", "FLAT", "FOOD",
    "FOOT", "FORM", "FREE", "FUEL", "FULL", "GAME", "GATE", "GIFT", "GOAL", "GOLD",
    "GOOD", "GRAY", "GROW", "HAIR", "HALF", "HALL", "HAND", "HARD", "HEAD", "HEAT",
    "HERO", "HIGH", "HILL", "HOLD", "HOME", "HOPE", "HOUR", "IDEA", "IRON", "JUMP",
    "KIND", "KING", "LAKE", "LAND", "LAST", "LATE", "LEAD", "LIFE", "LIFT", "LINE",
    "LION", "LIST", "LOAD", "LOCK", "LONG", "LOOK", "LORD", "LOUD", "LOVE", "LUCK",
    "MAIL", "MAIN", "MAKE", "MARK", "MEAL", "MEAT", "MILD", "MILE", "MILK", "MIND",
    "MOOD", "MOON", "NAME", "NEAR", "NECK", "NEWS", "NICE", "NOTE", "OPEN", "PACE",
    "PACK", "PAGE", "PAIN", "PAIR", "PALM", "PARK", "PART", "PASS", "PAST", "PATH",
    "PEAK", "PICK", "PINK", "PLAN", "PLAY", "POEM", "POET", "POOL", "PORT", "POST",
    "PURE", "PUSH", "RACE", "RAIN", "RANK", "RARE", "RATE", "READ", "REAL", "REST",
    "RICE", "RICH", "RIDE", "RING", "RISE", "RISK", "ROAD", "ROCK", "ROLE", "ROOF",
    "ROOM", "ROOT", "ROSE", "RULE", "RUSH", "SAFE", "SALT", "SAND", "SEAT", "SEED",
    "SELF", "SELL", "SEND", "SHIP", "SHOP", "SHOT", "SHOW", "SIDE", "SIGN", "SILK",
    "SING", "SITE", "SIZE", "SKIN", "SLOW", "SNOW", "SOFT", "SOIL", "SONG", "SORT",
    "SOUL", "SOUP", "SPOT", "STAR", "STAY", "STEP", "STOP", "SUIT", "SURE", "TALE",
    "TALK", "TALL", "TASK", "TEAM", "TERM", "TEST", "TEXT", "THIN", "TIDE", "TIME",
    "TINY", "TONE", "TOOL", "TOUR", "TOWN", "TREE", "TRIP", "TRUE", "TUNE", "TURN",
    "TYPE", "UNIT", "VAST", "VIEW", "VOTE", "WAGE", "WAIT", "WAKE", "WALK", "WALL",
    "WARM", "WASH", "WAVE", "WEAK", "WEAR", "WEEK", "WELL", "WEST", "WIDE", "WIFE",
    "WILD", "WIND", "WINE", "WING", "WISE", "WISH", "WOOD", "WOOL", "WORD", "WORK",
    "YARD", "YEAR", "ZERO", "ZONE",
];

pub const DICTIONARY_4: &[&str] = &[
    "ACHE", "ACRE", "AJAR", "ALOE", "APEX", "ARCH", "ARID", "AURA", "AXIS", "BARK",
    "BEAM", "BOLD", "BORE", "BUZZ", "CHIC", "CLAM", "CLAW", "CLIP", "CLUE", "COZY",
    "CUBE", "CURL", "CUSP", "DART", "DAWN", "DICE", "DOCK", "DOME", "DOVE", "DRUM",
    "DUSK", "ECHO", "ENVY", "EPIC", "FERN", "FLUX", "FOAM", "FROG", "GAZE", "GLOW",
    "GRIN", "HALO", "HAZE", "HERB", "HIVE", "HUSH", "ICON", "JADE", "JOLT", "KELP",
    "KILN", "KNOB", "LAVA", "LIMB", "LUSH", "MAZE", "MINT", "MOSS", "MYTH", "NEST",
    "NOON", "OATH", "OBOE", "ONYX", "OPAL", "PEAR", "PLUM", "PROW", "QUIZ", "RAFT",
    "REEF", "RUNE", "SAGE", "SILO", "SWAN", "TUSK", "VASE", "VEIL", "VINE", "WASP",
    "WHIM", "WREN", "YAWN", "ZEST", "ZINC",
];

pub const ANSWERS_5: &[&str] = &[
    "ABOUT", "ABOVE", "ACTOR", "ADMIT", "ADOPT", "ADULT", "AFTER", "AGAIN", "AGENT", "AGREE",
    "AHEAD", "ALARM", "ALBUM", "ALERT", "ALIVE", "ALLOW", "ALONE", "ALONG", "ALTER", "AMAZE",
    "ANGER", "ANGLE", "ANGRY", "APART", "APPLE", "APPLY", "ARENA", "ARGUE", "ARISE", "ASIDE",
    "AUDIO", "AVOID", "AWAKE", "AWARD", "AWARE", "BADGE", "BAKER", "BASIC", "BEACH", "BEGAN",
    "BEGIN", "BEING", "BELOW", "BENCH", "BIRTH", "BLACK", "BLADE", "BLAME", "BLAND", "BLANK",
    "BLAST", "BLAZE", "BLEND", "BLESS", "BLIND", "BLOCK", "BLOOD", "BLOOM", "BLUSH", "BOARD",
    "BONUS", "BOOST", "BOOTH", "BOUND", "BRAIN", "BRAND", "BRAVE", "BREAD", "BREAK", "BRICK",
    "BRIDE", "BRIEF", "BRING", "BROAD", "BROWN", "BRUSH", "BUILD", "BUNCH", "BURST", "BUYER",
    "CABIN", "CABLE", "CANDY", "CARGO", "CARRY", "CATCH", "CAUSE", "CHAIN", "CHAIR", "CHALK",
    "CHARM", "CHART", "CHASE", "CHEAP", "CHECK", "CHESS", "CHEST", "CHIEF", "CHILD", "CHILL",
    "CHOIR", "CHORD", "CHOSE", "CIVIL", "CLAIM", "CLASS", "CLEAN", "CLEAR", "CLERK", "CLICK",
    "CLIFF", "CLIMB", "CLOCK", "CLOSE", "CLOTH", "CLOUD", "COACH", "COAST", "COLOR", "COMET",
    "COUCH", "COUNT", "COURT", "COVER", "CRACK", "CRAFT", "CRANE", "CRASH", "CREAM", "CRIME",
    "CROSS", "CROWD", "CROWN", "CRUSH", "CURVE", "CYCLE", "DAILY", "DAIRY", "DANCE", "DEATH",
    "DELAY", "DEPTH", "DIRTY", "DOUBT", "DOZEN", "DRAFT", "DRAIN", "DRAMA", "DREAM", "DRESS",
    "DRIFT", "DRILL", "DRINK", "DRIVE", "EAGER", "EAGLE", "EARLY", "EARTH", "EIGHT", "EMPTY",
    "ENEMY", "ENJOY", "ENTER", "ENTRY", "EQUAL", "ERROR", "EVENT", "EVERY", "EXACT", "EXIST",
    "EXTRA", "FAITH", "FALSE", "FANCY", "FAULT", "FAVOR", "FENCE", "FEVER", "FIELD", "FIFTH",
    "FIFTY", "FIGHT", "FINAL", "FIRST", "FLAME", "FLASH", "FLEET", "FLOAT", "FLOCK", "FLOOD",
    "FLOOR", "FLOUR", "FLUID", "FOCUS", "FORCE", "FORGE", "FORTH", "FORTY", "FORUM", "FOUND",
    "FRAME", "FRESH", "FRONT", "FROST", "FRUIT", "FUNNY", "GIANT", "GIVEN", "GLASS", "GLOBE",
    "GLORY", "GRACE", "GRADE", "GRAIN", "GRAND", "GRANT", "GRAPE", "GRASP", "GRASS", "GRAVE",
    "GREAT", "GREEN", "GREET", "GROUP", "GUARD", "GUESS", "GUEST", "GUIDE", "HAPPY", "HARSH",
    "HEART", "HEAVY", "HONEY", "HORSE", "HOTEL", "HOUSE", "HUMAN", "HUMOR", "IDEAL", "IMAGE",
    "INDEX", "INNER", "INPUT", "ISSUE", "JOINT", "JUDGE", "JUICE", "KNIFE", "KNOCK", "KNOWN",
    "LABEL", "LARGE", "LASER", "LATER", "LAUGH", "LAYER", "LEARN", "LEAST", "LEAVE", "LEGAL",
    "LEMON", "LEVEL", "LIGHT", "LIMIT", "LOCAL", "LOGIC", "LOOSE", "LOWER", "LOYAL", "LUCKY",
    "LUNCH", "MAGIC", "MAJOR", "MAKER", "MARCH", "MATCH", "MAYBE", "MAYOR", "MEDAL", "MEDIA",
    "MERCY", "MERGE", "MERIT", "METAL", "METER", "MINOR", "MODEL", "MONEY", "MONTH", "MORAL",
    "MOTOR", "MOUNT", "MOUSE", "MOUTH", "MOVIE", "MUSIC", "NERVE", "NEVER", "NIGHT", "NOBLE",
    "NOISE", "NORTH", "NOVEL", "NURSE", "OCCUR", "OCEAN", "OFFER", "OFTEN", "ONION", "ORDER",
    "OTHER", "OUTER", "OWNER", "PAINT", "PANEL", "PAPER", "PARTY", "PATCH", "PAUSE", "PEACE",
    "PHASE", "PHONE", "PHOTO", "PIANO", "PIECE", "PILOT", "PITCH", "PIZZA", "PLACE", "PLAIN",
    "PLANE", "PLANT", "PLATE", "POINT", "POUND", "POWER", "PRESS", "PRICE", "PRIDE", "PRIME",
    "PRINT", "PRIZE", "PROOF", "PROUD", "PROVE", "PUPIL", "QUEEN", "QUICK", "QUIET", "QUITE",
    "QUOTE", "RADIO", "RAISE", "RANGE", "RAPID", "RATIO", "REACH", "REACT", "READY", "REALM",
    "RIGHT", "RIVAL", "RIVER", "ROAST", "ROBIN", "ROCKY", "ROUGH", "ROUND", "ROUTE", "ROYAL",
    "RURAL", "SALAD", "SCALE", "SCENE", "SCOPE", "SCORE", "SCOUT", "SENSE", "SERVE", "SEVEN",
    "SHADE", "SHAKE", "SHAME", "SHAPE", "SHARE", "SHARP", "SHEEP", "SHEET", "SHELF", "SHELL",
    "SHIFT", "SHINE", "SHIRT", "SHOCK", "SHORE", "SHORT", "SHOUT", "SIGHT", "SILLY", "SINCE",
    "SIXTY", "SKILL", "SLEEP", "SLICE", "SLIDE", "SLIME", "SLOPE", "SMALL", "SMART", "SMELL",
    "SMILE", "SMOKE", "SNAKE", "SOLAR", "SOLID", "SOLVE", "SORRY", "SOUND", "SOUTH", "SPACE",
    "SPARE", "SPARK", "SPEAK", "SPEED", "SPELL", "SPEND", "SPICE", "SPLIT", "SPORT", "STAFF",
    "STAGE", "STAIR", "STAKE", "STAND", "START", "STATE", "STEAM", "STEEL", "STEEP", "STICK",
    "STILL", "STOCK", "STONE", "STORE", "STORM", "STORY", "STUDY", "STUFF", "STYLE", "SUGAR",
    "SUITE", "SUNNY", "SUPER", "SWEET", "SWIFT", "SWING", "SWORD", "TABLE", "TAKEN", "TASTE",
    "TEACH", "TEETH", "THANK", "THEME", "THICK", "THING", "THINK", "THIRD", "THREE", "THROW",
    "THUMB", "TIGER", "TIGHT", "TIRED", "TITLE", "TODAY", "TOKEN", "TOPIC", "TOTAL", "TOUCH",
    "TOUGH", "TOWEL", "TOWER", "TRACE", "TRACK", "TRADE", "TRAIL", "TRAIN", "TRAIT", "TREAT",
    "TREND", "TRIAL", "TRIBE", "TRICK", "TRUCK", "TRUNK", "TRUST", "TRUTH", "TWICE", "UNCLE",
    "UNDER", "UNION", "UNITE", "UNITY", "UNTIL", "UPPER", "UPSET", "URBAN", "USAGE", "USUAL",
    "VAGUE", "VALID", "VALUE", "VIDEO", "VIRUS", "VISIT", "VITAL", "VIVID", "VOCAL", "VOICE",
    "WAGON", "WASTE", "WATCH", "WATER", "WHEAT", "WHEEL", "WHITE", "WHOLE", "WIDTH", "WOMAN",
    "WORLD", "WORRY", "WORTH", "WOUND", "WRIST", "WRITE", "WRONG", "YIELD", "YOUNG", "YOUTH",
];

/// The classic daily-puzzle answer pool (a stricter subset)
pub const WORDLE_ANSWERS_5: &[&str] = &[
    "ABOUT", "ALARM", "ALBUM", "ALERT", "ANGER", "APPLE", "AWAKE", "BADGE", "BEACH", "BLAME",
    "BLAST", "BLUSH", "BRAVE", "BREAD", "BRICK", "BRIDE", "BRUSH", "CABIN", "CANDY", "CHAIR",
    "CHARM", "CHESS", "CHILL", "CHORD", "CLIMB", "CLOCK", "CLOUD", "COACH", "COMET", "CRANE",
    "CREAM", "CROWN", "CYCLE", "DAIRY", "DANCE", "DRAFT", "DREAM", "DRIFT", "EAGLE", "EARTH",
    "FABLE", "FLAME", "FLOAT", "FROST", "FRUIT", "GLOBE", "GRACE", "GRAPE", "GREET", "HEART",
    "HONEY", "HOUSE", "JUICE", "KNIFE", "LEMON", "LIGHT", "LUCKY", "MAPLE", "MEDAL", "MOUSE",
    "NOBLE", "OCEAN", "PEARL", "PIANO", "PLANT", "PRIZE", "QUEEN", "QUIET", "RAISE", "RIVER",
    "ROBIN", "ROYAL", "SHINE", "SLICE", "SMILE", "SNAKE", "SPARK", "SPICE", "STONE", "STORM",
    "SUGAR", "SWEET", "TIGER", "TOWER", "TRAIN", "TRUST", "VIVID", "VOICE", "WHEAT", "WORLD",
];

pub const DICTIONARY_5: &[&str] = &[
    "ALTAR", "AMBER", "AMBLE", "AMUSE", "ANKLE", "ANNEX", "ANNOY", "ANVIL", "APRON", "AROMA",
    "ASHEN", "ASKEW", "ATLAS", "ATTIC", "AVAIL", "AVERT", "AWAIT", "AWFUL", "BACON", "BALMY",
    "BARGE", "BASIL", "BATON", "BERRY", "BINGE", "BIRCH", "BISON", "BLEAK", "BLURB", "BONGO",
    "BRISK", "BROTH", "BUDGE", "BUGGY", "BUNNY", "CANAL", "CEDAR", "CHANT", "CIDER", "CLASH",
    "CLING", "COBRA", "CORAL", "CRAMP", "CREST", "CUMIN", "CURLY", "DAISY", "DINER", "DITTO",
    "DODGE", "DONOR", "DRONE", "DWELL", "EBONY", "ELBOW", "ELOPE", "EMBER", "EPOCH", "EVOKE",
    "FABLE", "FERRY", "FJORD", "FLAIR", "FLINT", "FOAMY", "FUDGE", "GAMER", "GAUGE", "GECKO",
    "GLINT", "GNOME", "GRIME", "GROVE", "GUSTO", "HASTE", "HAZEL", "HEIST", "HINGE", "HOIST",
    "HUMID", "HUSKY", "IGLOO", "IRONY", "IVORY", "JELLY", "JOLLY", "KAYAK", "KIOSK", "KNEEL",
    "LAGER", "LANCE", "LATCH", "LEDGE", "LEMUR", "LILAC", "LIMES", "LLAMA", "LODGE", "LUNAR",
    "LUPUS", "LUSTY", "MANGO", "MAPLE", "MARSH", "MIRTH", "MOIST", "MOSSY", "MOTIF", "MULCH",
    "MURAL", "NICHE", "NINJA", "NOMAD", "NUDGE", "NYMPH", "OASIS", "OLIVE", "OPERA", "ORBIT",
    "OTTER", "OUNCE", "OXIDE", "OZONE", "PASTA", "PEARL", "PERCH", "PIVOT", "PLUSH", "POLKA",
    "PRAWN", "PRISM", "QUILT", "RALLY", "RANCH", "RELIC", "RHYME", "RIDGE", "ROGUE", "RUSTY",
    "SAUNA", "SCARF", "SCONE", "SEEMS", "SHRUB", "SIEGE", "SLANG", "SLOTH", "SMIRK", "SNOUT",
    "SONIC", "SPIRE", "SQUID", "STOIC", "SWOOP", "TANGO", "TEMPO", "THYME", "TOAST", "TONIC",
    "TORCH", "TULIP", "TWEED", "UDDER", "UMBRA", "VAPOR", "VENOM", "VERGE", "VINYL", "WALTZ",
    "WHARF", "WHISK", "WIDOW", "WOKEN", "YACHT", "ZEBRA", "ZESTY",
];

pub const ANSWERS_6: &[&str] = &[
    "ACCEPT", "ACTION", "ADVICE", "AGENCY", "ALMOST", "ANIMAL", "ANSWER", "ANYONE", "APPEAR", "AROUND",
    "ARRIVE", "ARTIST", "ASPECT", "ASSUME", "ATTACK", "AUTHOR", "AUTUMN", "BANANA", "BATTLE", "BEAUTY",
    "BECOME", "BEFORE", "BEHIND", "BELIEF", "BELONG", "BETTER", "BEYOND", "BORDER", "BOTTLE", "BOTTOM",
    "BRANCH", "BREATH", "BRIDGE", "BRIGHT", "BROKEN", "BUDGET", "BURDEN", "BUTTER", "BUTTON", "CAMERA",
    "CANDLE", "CANVAS", "CARBON", "CAREER", "CASTLE", "CAUGHT", "CENTER", "CHANCE", "CHANGE", "CHARGE",
    "CHOICE", "CHOOSE", "CHURCH", "CIRCLE", "CLEVER", "CLIENT", "COFFEE", "COLUMN", "COMEDY", "COMMON",
    "COPPER", "CORNER", "COTTON", "COUPLE", "COURSE", "COUSIN", "CREATE", "CREDIT", "CRISIS", "CUSTOM",
    "DAMAGE", "DANGER", "DEBATE", "DECADE", "DECIDE", "DEFEAT", "DEFEND", "DEGREE", "DEMAND", "DESERT",
    "DESIGN", "DESIRE", "DETAIL", "DEVICE", "DINNER", "DIRECT", "DOCTOR", "DOLLAR", "DOMAIN", "DOUBLE",
    "DRAGON", "DRIVEN", "DURING", "EDITOR", "EFFECT", "EFFORT", "EITHER", "ELEVEN", "EMPIRE", "ENABLE",
    "ENERGY", "ENGINE", "ENOUGH", "ENSURE", "ENTIRE", "ESCAPE", "ESTATE", "EXPAND", "EXPECT", "EXPERT",
    "FABRIC", "FAMILY", "FAMOUS", "FATHER", "FELLOW", "FEMALE", "FIGURE", "FINGER", "FINISH", "FLIGHT",
    "FLOWER", "FOLLOW", "FOREST", "FORGET", "FORMAL", "FORMER", "FOURTH", "FRIEND", "FROZEN", "FUTURE",
    "GARDEN", "GATHER", "GENTLE", "GLOBAL", "GOLDEN", "GROUND", "GROWTH", "GUITAR", "HANDLE", "HAPPEN",
    "HEALTH", "HEIGHT", "HIDDEN", "HONEST", "HUMBLE", "HUNGRY", "IMPACT", "INCOME", "INDEED", "INSECT",
    "INSIDE", "INVITE", "ISLAND", "JACKET", "JUNGLE", "JUNIOR", "KITTEN", "LADDER", "LAUNCH", "LAWYER",
    "LEADER", "LEAGUE", "LESSON", "LETTER", "LIKELY", "LISTEN", "LITTLE", "LONELY", "LUXURY", "MANAGE",
    "MANNER", "MARBLE", "MARGIN", "MARKET", "MASTER", "MATTER", "MEADOW", "MEDIUM", "MEMBER", "MEMORY",
    "METHOD", "MIDDLE", "MINUTE", "MIRROR", "MOBILE", "MODERN", "MODEST", "MOMENT", "MONKEY", "MOTHER",
    "MOTION", "MUSEUM", "MUTUAL", "MYSELF", "NARROW", "NATION", "NATIVE", "NATURE", "NEARBY", "NEEDLE",
    "NOBODY", "NORMAL", "NOTICE", "NOTION", "NUMBER", "OBJECT", "OBTAIN", "OFFICE", "ONLINE", "OPTION",
    "ORANGE", "ORIGIN", "OXYGEN", "PALACE", "PARENT", "PEOPLE", "PEPPER", "PERIOD", "PERMIT", "PERSON",
    "PICKLE", "PICNIC", "PLANET", "PLEASE", "PLENTY", "POCKET", "POETRY", "POLICE", "POLICY", "PRETTY",
    "PRINCE", "PRISON", "PROFIT", "PROPER", "PUBLIC", "PURPLE", "PUZZLE", "RABBIT", "RANDOM", "RATHER",
    "REASON", "RECALL", "RECENT", "RECORD", "REDUCE", "REFORM", "REFUSE", "REGION", "REGRET", "REMAIN",
    "REMOVE", "REPAIR", "REPEAT", "REPORT", "RESCUE", "RESORT", "RESULT", "RETAIL", "RETURN", "REVEAL",
    "REVIEW", "REWARD", "RHYTHM", "RIBBON", "ROCKET", "RUBBER", "SAFETY", "SALMON", "SAMPLE", "SCHEME",
    "SCREEN", "SEARCH", "SEASON", "SECOND", "SECRET", "SECTOR", "SECURE", "SELECT", "SENIOR", "SETTLE",
    "SEVERE", "SHADOW", "SHOULD", "SHOWER", "SILENT", "SILVER", "SIMPLE", "SINGLE", "SISTER", "SKETCH",
    "SLIGHT", "SMOOTH", "SOCCER", "SOCIAL", "SOURCE", "SPEECH", "SPHERE", "SPIRIT", "SPREAD", "SPRING",
    "SQUARE", "STABLE", "STATUS", "STEADY", "STREAM", "STREET", "STRESS", "STRICT", "STRING", "STRONG",
    "STUDIO", "SUBMIT", "SUDDEN", "SUMMER", "SUNSET", "SUPPLY", "SURVEY", "SWITCH", "SYMBOL", "SYSTEM",
    "TALENT", "TARGET", "TEMPLE", "TENDER", "TENNIS", "THEORY", "THIRTY", "THREAD", "THREAT", "TICKET",
    "TIMBER", "TISSUE", "TOMATO", "TONGUE", "TOWARD", "TRAVEL", "TREATY", "TUNNEL", "TURTLE", "TWELVE",
    "TWENTY", "UNABLE", "UNIQUE", "UNLESS", "UNLIKE", "UPDATE", "URGENT", "USEFUL", "VALLEY", "VELVET",
    "VENDOR", "VICTIM", "VIOLET", "VIRTUE", "VISION", "VOLUME", "WEALTH", "WEAPON", "WEEKLY", "WEIGHT",
    "WINDOW", "WINNER", "WINTER", "WISDOM", "WITHIN", "WONDER", "WOODEN", "WORKER", "WRITER", "YELLOW",
];

pub const DICTIONARY_6: &[&str] = &[
    "BISTRO", "BLAZER", "CACTUS", "CANYON", "CASINO", "COBALT", "COCOON", "CRAYON", "DAZZLE", "EMBLEM",
    "FIASCO", "FIDGET", "FROLIC", "GALAXY", "GAZEBO", "GOBLET", "HAMMER", "IGUANA", "JIGSAW", "KERNEL",
    "LIZARD", "MARMOT", "MUFFIN", "NOODLE", "NUGGET", "OCELOT", "PARROT", "PEBBLE", "QUIVER", "SALUTE",
    "TANDEM", "TOFFEE", "TURNIP", "VORTEX", "WALNUT", "WIZARD", "YOGURT", "ZEALOT", "ZENITH", "ZIGZAG",
    "ZIPPER",
];
