// Generated from the DeHackEd reference tables. Edit with care.

/// Keys accepted in a `[STRINGS]` section.
pub(super) static KEYS: &[&str] = &[
    "AMSTR_FOLLOWOFF",
    "AMSTR_FOLLOWON",
    "AMSTR_GRIDOFF",
    "AMSTR_GRIDON",
    "AMSTR_MARKEDSPOT",
    "AMSTR_MARKSCLEARED",
    "BGCASTCALL",
    "BGFLAT06",
    "BGFLAT11",
    "BGFLAT15",
    "BGFLAT20",
    "BGFLAT30",
    "BGFLAT31",
    "BGFLATE1",
    "BGFLATE2",
    "BGFLATE3",
    "BGFLATE4",
    "C1TEXT",
    "C2TEXT",
    "C3TEXT",
    "C4TEXT",
    "C5TEXT",
    "C6TEXT",
    "CC_ARACH",
    "CC_ARCH",
    "CC_BARON",
    "CC_CACO",
    "CC_CYBER",
    "CC_DEMON",
    "CC_HEAVY",
    "CC_HELL",
    "CC_HERO",
    "CC_IMP",
    "CC_LOST",
    "CC_MANCU",
    "CC_PAIN",
    "CC_REVEN",
    "CC_SHOTGUN",
    "CC_SPIDER",
    "CC_ZOMBIE",
    "D_CDROM",
    "D_DEVSTR",
    "DETAILHI",
    "DETAILLO",
    "E1TEXT",
    "E2TEXT",
    "E3TEXT",
    "E4TEXT",
    "EMPTYSTRING",
    "ENDGAME",
    "GAMMALVL0",
    "GAMMALVL1",
    "GAMMALVL2",
    "GAMMALVL3",
    "GAMMALVL4",
    "GGSAVED",
    "GOTARMBONUS",
    "GOTARMOR",
    "GOTBACKPACK",
    "GOTBERSERK",
    "GOTBFG9000",
    "GOTBLUECARD",
    "GOTBLUESKUL",
    "GOTCELL",
    "GOTCELLBOX",
    "GOTCHAINGUN",
    "GOTCHAINSAW",
    "GOTCLIP",
    "GOTCLIPBOX",
    "GOTHTHBONUS",
    "GOTINVIS",
    "GOTINVUL",
    "GOTLAUNCHER",
    "GOTMAP",
    "GOTMEDIKIT",
    "GOTMEDINEED",
    "GOTMEGA",
    "GOTMSPHERE",
    "GOTPLASMA",
    "GOTREDCARD",
    "GOTREDSKULL",
    "GOTROCKBOX",
    "GOTROCKET",
    "GOTSHELLBOX",
    "GOTSHELLS",
    "GOTSHOTGUN",
    "GOTSHOTGUN2",
    "GOTSTIM",
    "GOTSUIT",
    "GOTSUPER",
    "GOTVISOR",
    "GOTYELWCARD",
    "GOTYELWSKUL",
    "HUSTR_1",
    "HUSTR_10",
    "HUSTR_11",
    "HUSTR_12",
    "HUSTR_13",
    "HUSTR_14",
    "HUSTR_15",
    "HUSTR_16",
    "HUSTR_17",
    "HUSTR_18",
    "HUSTR_19",
    "HUSTR_2",
    "HUSTR_20",
    "HUSTR_21",
    "HUSTR_22",
    "HUSTR_23",
    "HUSTR_24",
    "HUSTR_25",
    "HUSTR_26",
    "HUSTR_27",
    "HUSTR_28",
    "HUSTR_29",
    "HUSTR_3",
    "HUSTR_30",
    "HUSTR_31",
    "HUSTR_32",
    "HUSTR_4",
    "HUSTR_5",
    "HUSTR_6",
    "HUSTR_7",
    "HUSTR_8",
    "HUSTR_9",
    "HUSTR_CHATMACRO0",
    "HUSTR_CHATMACRO1",
    "HUSTR_CHATMACRO2",
    "HUSTR_CHATMACRO3",
    "HUSTR_CHATMACRO4",
    "HUSTR_CHATMACRO5",
    "HUSTR_CHATMACRO6",
    "HUSTR_CHATMACRO7",
    "HUSTR_CHATMACRO8",
    "HUSTR_CHATMACRO9",
    "HUSTR_E1M1",
    "HUSTR_E1M2",
    "HUSTR_E1M3",
    "HUSTR_E1M4",
    "HUSTR_E1M5",
    "HUSTR_E1M6",
    "HUSTR_E1M7",
    "HUSTR_E1M8",
    "HUSTR_E1M9",
    "HUSTR_E2M1",
    "HUSTR_E2M2",
    "HUSTR_E2M3",
    "HUSTR_E2M4",
    "HUSTR_E2M5",
    "HUSTR_E2M6",
    "HUSTR_E2M7",
    "HUSTR_E2M8",
    "HUSTR_E2M9",
    "HUSTR_E3M1",
    "HUSTR_E3M2",
    "HUSTR_E3M3",
    "HUSTR_E3M4",
    "HUSTR_E3M5",
    "HUSTR_E3M6",
    "HUSTR_E3M7",
    "HUSTR_E3M8",
    "HUSTR_E3M9",
    "HUSTR_E4M1",
    "HUSTR_E4M2",
    "HUSTR_E4M3",
    "HUSTR_E4M4",
    "HUSTR_E4M5",
    "HUSTR_E4M6",
    "HUSTR_E4M7",
    "HUSTR_E4M8",
    "HUSTR_E4M9",
    "HUSTR_MESSAGESENT",
    "HUSTR_MSGU",
    "HUSTR_PLRBROWN",
    "HUSTR_PLRGREEN",
    "HUSTR_PLRINDIGO",
    "HUSTR_PLRRED",
    "HUSTR_TALKTOSELF1",
    "HUSTR_TALKTOSELF2",
    "HUSTR_TALKTOSELF3",
    "HUSTR_TALKTOSELF4",
    "HUSTR_TALKTOSELF5",
    "LOADNET",
    "MSGOFF",
    "MSGON",
    "NETEND",
    "NEWGAME",
    "NIGHTMARE",
    "P1TEXT",
    "P2TEXT",
    "P3TEXT",
    "P4TEXT",
    "P5TEXT",
    "P6TEXT",
    "PD_ALL3",
    "PD_ALL6",
    "PD_ANY",
    "PD_BLUEC",
    "PD_BLUEK",
    "PD_BLUEO",
    "PD_BLUES",
    "PD_REDC",
    "PD_REDK",
    "PD_REDO",
    "PD_REDS",
    "PD_YELLOWC",
    "PD_YELLOWK",
    "PD_YELLOWO",
    "PD_YELLOWS",
    "PHUSTR_1",
    "PHUSTR_10",
    "PHUSTR_11",
    "PHUSTR_12",
    "PHUSTR_13",
    "PHUSTR_14",
    "PHUSTR_15",
    "PHUSTR_16",
    "PHUSTR_17",
    "PHUSTR_18",
    "PHUSTR_19",
    "PHUSTR_2",
    "PHUSTR_20",
    "PHUSTR_21",
    "PHUSTR_22",
    "PHUSTR_23",
    "PHUSTR_24",
    "PHUSTR_25",
    "PHUSTR_26",
    "PHUSTR_27",
    "PHUSTR_28",
    "PHUSTR_29",
    "PHUSTR_3",
    "PHUSTR_30",
    "PHUSTR_31",
    "PHUSTR_32",
    "PHUSTR_4",
    "PHUSTR_5",
    "PHUSTR_6",
    "PHUSTR_7",
    "PHUSTR_8",
    "PHUSTR_9",
    "QLOADNET",
    "QLPROMPT",
    "QSAVESPOT",
    "QSPROMPT",
    "QUITMSG",
    "SAVEDEAD",
    "SAVEGAMENAME",
    "STARTUP1",
    "STARTUP2",
    "STARTUP3",
    "STARTUP4",
    "STARTUP5",
    "STSTR_BEHOLD",
    "STSTR_BEHOLDX",
    "STSTR_CHOPPERS",
    "STSTR_CLEV",
    "STSTR_COMPOFF",
    "STSTR_COMPON",
    "STSTR_DQDOFF",
    "STSTR_DQDON",
    "STSTR_FAADDED",
    "STSTR_KFAADDED",
    "STSTR_MUS",
    "STSTR_NCOFF",
    "STSTR_NCON",
    "STSTR_NOMUS",
    "SWSTRING",
    "T1TEXT",
    "T2TEXT",
    "T3TEXT",
    "T4TEXT",
    "T5TEXT",
    "T6TEXT",
    "THUSTR_1",
    "THUSTR_10",
    "THUSTR_11",
    "THUSTR_12",
    "THUSTR_13",
    "THUSTR_14",
    "THUSTR_15",
    "THUSTR_16",
    "THUSTR_17",
    "THUSTR_18",
    "THUSTR_19",
    "THUSTR_2",
    "THUSTR_20",
    "THUSTR_21",
    "THUSTR_22",
    "THUSTR_23",
    "THUSTR_24",
    "THUSTR_25",
    "THUSTR_26",
    "THUSTR_27",
    "THUSTR_28",
    "THUSTR_29",
    "THUSTR_3",
    "THUSTR_30",
    "THUSTR_31",
    "THUSTR_32",
    "THUSTR_4",
    "THUSTR_5",
    "THUSTR_6",
    "THUSTR_7",
    "THUSTR_8",
    "THUSTR_9",
    "QUITMSG1",
    "QUITMSG2",
    "QUITMSG3",
    "QUITMSG4",
    "QUITMSG5",
    "QUITMSG6",
    "QUITMSG7",
    "QUITMSG8",
    "QUITMSG9",
    "QUITMSG10",
    "QUITMSG11",
    "QUITMSG12",
    "QUITMSG13",
    "QUITMSG14",
    "QUITMSG15",
    "QUITMSG16",
    "QUITMSG17",
    "QUITMSG18",
    "QUITMSG19",
    "QUITMSG20",
    "QUITMSG21",
    "QUITMSG22",
    "QUITMSG23",
    "QUITMSG24",
    "QUITMSG25",
    "QUITMSG26",
    "QUITMSG27",
    "QUITMSG28",
    "QUITMSG29",
    "TXT_FRAGLIMIT",
    "TXT_TIMELIMIT",
    "SPREEKILLSELF",
    "SPREEOVER",
    "SPREE5",
    "SPREE10",
    "SPREE15",
    "SPREE20",
    "SPREE25",
    "MULTI2",
    "MULTI3",
    "MULTI4",
    "MULTI5",
    "AM_MONSTERS",
    "AM_SECRETS",
    "AM_ITEMS",
    "OB_SUICIDE",
    "OB_FALLING",
    "OB_CRUSH",
    "OB_EXIT",
    "OB_WATER",
    "OB_SLIME",
    "OB_LAVA",
    "OB_BARREL",
    "OB_SPLASH",
    "OB_R_SPLASH",
    "OB_ROCKET",
    "OB_KILLEDSELF",
    "OB_VOODOO",
    "OB_MPTELEFRAG",
    "OB_MONTELEFRAG",
    "OB_DEFAULT",
    "OB_MPDEFAULT",
    "OB_FRIENDLY1",
    "OB_FRIENDLY2",
    "OB_FRIENDLY3",
    "OB_FRIENDLY4",
    "OB_STEALTHBABY",
    "OB_STEALTHVILE",
    "OB_STEALTHBARON",
    "OB_STEALTHCACO",
    "OB_STEALTHCHAINGUY",
    "OB_STEALTHDEMON",
    "OB_STEALTHKNIGHT",
    "OB_STEALTHIMP",
    "OB_STEALTHFATSO",
    "OB_STEALTHUNDEAD",
    "OB_STEALTHSHOTGUNGUY",
    "OB_STEALTHZOMBIE",
    "OB_UNDEADHIT",
    "OB_IMPHIT",
    "OB_CACOHIT",
    "OB_DEMONHIT",
    "OB_SPECTREHIT",
    "OB_BARONHIT",
    "OB_KNIGHTHIT",
    "OB_ZOMBIE",
    "OB_SHOTGUY",
    "OB_VILE",
    "OB_UNDEAD",
    "OB_FATSO",
    "OB_CHAINGUY",
    "OB_SKULL",
    "OB_IMP",
    "OB_CACO",
    "OB_BARON",
    "OB_KNIGHT",
    "OB_SPIDER",
    "OB_BABY",
    "OB_CYBORG",
    "OB_WOLFSS",
    "OB_DOG",
    "OB_MPFIST",
    "OB_MPCHAINSAW",
    "OB_MPPISTOL",
    "OB_MPSHOTGUN",
    "OB_MPSSHOTGUN",
    "OB_MPCHAINGUN",
    "OB_MPROCKET",
    "OB_MPR_SPLASH",
    "OB_MPPLASMARIFLE",
    "OB_MPBFG_BOOM",
    "OB_MPBFG_SPLASH",
    "OB_RAILGUN",
    "OB_MPBFG_MBF",
];

/// (episode, map, seconds). Episode 0 means the map is named by number only.
pub(super) static PARS: &[(i32, i32, i32)] = &[
    (1, 1, 30),
    (1, 2, 75),
    (1, 3, 120),
    (1, 4, 90),
    (1, 5, 165),
    (1, 6, 180),
    (1, 7, 180),
    (1, 8, 165),
    (1, 9, 165),
    (2, 1, 90),
    (2, 2, 90),
    (2, 3, 90),
    (2, 4, 120),
    (2, 5, 90),
    (2, 6, 360),
    (2, 7, 240),
    (2, 8, 135),
    (2, 9, 170),
    (3, 1, 90),
    (3, 2, 45),
    (3, 3, 90),
    (3, 4, 150),
    (3, 5, 90),
    (3, 6, 90),
    (3, 7, 165),
    (3, 8, 105),
    (3, 9, 135),
    (4, 1, 165),
    (4, 2, 255),
    (4, 3, 135),
    (4, 4, 150),
    (4, 5, 180),
    (4, 6, 390),
    (4, 7, 135),
    (4, 8, 360),
    (4, 9, 180),
    (0, 1, 30),
    (0, 2, 90),
    (0, 3, 120),
    (0, 4, 120),
    (0, 5, 90),
    (0, 6, 150),
    (0, 7, 120),
    (0, 8, 120),
    (0, 9, 270),
    (0, 10, 90),
    (0, 11, 210),
    (0, 12, 150),
    (0, 13, 150),
    (0, 14, 150),
    (0, 15, 210),
    (0, 16, 150),
    (0, 17, 420),
    (0, 18, 150),
    (0, 19, 210),
    (0, 20, 150),
    (0, 21, 240),
    (0, 22, 150),
    (0, 23, 180),
    (0, 24, 150),
    (0, 25, 150),
    (0, 26, 300),
    (0, 27, 350),
    (0, 28, 420),
    (0, 29, 300),
    (0, 30, 180),
    (0, 31, 120),
    (0, 32, 30),
];
