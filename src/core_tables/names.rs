// Generated from the DeHackEd reference tables. Edit with care.

/// Vanilla sprite names. Index 138 is `TNT1`, the invisible sprite.
pub(super) static SPRITES: &[&str] = &[
    "TROO", "SHTG", "PUNG", "PISG", "PISF", "SHTF", "SHT2", "CHGG",
    "CHGF", "MISG", "MISF", "SAWG", "PLSG", "PLSF", "BFGG", "BFGF",
    "BLUD", "PUFF", "BAL1", "BAL2", "PLSS", "PLSE", "MISL", "BFS1",
    "BFE1", "BFE2", "TFOG", "IFOG", "PLAY", "POSS", "SPOS", "VILE",
    "FIRE", "FATB", "FBXP", "SKEL", "MANF", "FATT", "CPOS", "SARG",
    "HEAD", "BAL7", "BOSS", "BOS2", "SKUL", "SPID", "BSPI", "APLS",
    "APBX", "CYBR", "PAIN", "SSWV", "KEEN", "BBRN", "BOSF", "ARM1",
    "ARM2", "BAR1", "BEXP", "FCAN", "BON1", "BON2", "BKEY", "RKEY",
    "YKEY", "BSKU", "RSKU", "YSKU", "STIM", "MEDI", "SOUL", "PINV",
    "PSTR", "PINS", "MEGA", "SUIT", "PMAP", "PVIS", "CLIP", "AMMO",
    "ROCK", "BROK", "CELL", "CELP", "SHEL", "SBOX", "BPAK", "BFUG",
    "MGUN", "CSAW", "LAUN", "PLAS", "SHOT", "SGN2", "COLU", "SMT2",
    "GOR1", "POL2", "POL5", "POL4", "POL3", "POL1", "POL6", "GOR2",
    "GOR3", "GOR4", "GOR5", "SMIT", "COL1", "COL2", "COL3", "COL4",
    "CAND", "CBRA", "COL6", "TRE1", "TRE2", "ELEC", "CEYE", "FSKU",
    "COL5", "TBLU", "TGRN", "TRED", "SMBT", "SMGT", "SMRT", "HDB1",
    "HDB2", "HDB3", "HDB4", "HDB5", "HDB6", "POB1", "POB2", "BRS1",
    "TLMP", "TLP2", "TNT1",
];

/// Sprites appended by MBF.
pub(super) static SPRITES_MBF: &[&str] = &[
    "DOGS", "PLS1", "PLS2", "BON3", "BON4",
];

/// Sprites appended by the extended (DEHEXTRA) tables.
pub(super) static SPRITES_EXTENDED: &[&str] = &[
    "BLD2", "SP00", "SP01", "SP02", "SP03", "SP04", "SP05", "SP06",
    "SP07", "SP08", "SP09", "SP10", "SP11", "SP12", "SP13", "SP14",
    "SP15", "SP16", "SP17", "SP18", "SP19", "SP20", "SP21", "SP22",
    "SP23", "SP24", "SP25", "SP26", "SP27", "SP28", "SP29", "SP30",
    "SP31", "SP32", "SP33", "SP34", "SP35", "SP36", "SP37", "SP38",
    "SP39", "SP40", "SP41", "SP42", "SP43", "SP44", "SP45", "SP46",
    "SP47", "SP48", "SP49", "SP50", "SP51", "SP52", "SP53", "SP54",
    "SP55", "SP56", "SP57", "SP58", "SP59", "SP60", "SP61", "SP62",
    "SP63", "SP64", "SP65", "SP66", "SP67", "SP68", "SP69", "SP70",
    "SP71", "SP72", "SP73", "SP74", "SP75", "SP76", "SP77", "SP78",
    "SP79", "SP80", "SP81", "SP82", "SP83", "SP84", "SP85", "SP86",
    "SP87", "SP88", "SP89", "SP90", "SP91", "SP92", "SP93", "SP94",
    "SP95", "SP96", "SP97", "SP98", "SP99",
];

/// Vanilla sound names, starting at sound 1. (sound 0 is the "none" sound)
pub(super) static SOUNDS: &[&str] = &[
    "PISTOL", "SHOTGN", "SGCOCK", "DSHTGN", "DBOPN", "DBCLS", "DBLOAD", "PLASMA",
    "BFG", "SAWUP", "SAWIDL", "SAWFUL", "SAWHIT", "RLAUNC", "RXPLOD", "FIRSHT",
    "FIRXPL", "PSTART", "PSTOP", "DOROPN", "DORCLS", "STNMOV", "SWTCHN", "SWTCHX",
    "PLPAIN", "DMPAIN", "POPAIN", "VIPAIN", "MNPAIN", "PEPAIN", "SLOP", "ITEMUP",
    "WPNUP", "OOF", "TELEPT", "POSIT1", "POSIT2", "POSIT3", "BGSIT1", "BGSIT2",
    "SGTSIT", "CACSIT", "BRSSIT", "CYBSIT", "SPISIT", "BSPSIT", "KNTSIT", "VILSIT",
    "MANSIT", "PESIT", "SKLATK", "SGTATK", "SKEPCH", "VILATK", "CLAW", "SKESWG",
    "PLDETH", "PDIEHI", "PODTH1", "PODTH2", "PODTH3", "BGDTH1", "BGDTH2", "SGTDTH",
    "CACDTH", "SKLDTH", "BRSDTH", "CYBDTH", "SPIDTH", "BSPDTH", "VILDTH", "KNTDTH",
    "PEDTH", "SKEDTH", "POSACT", "BGACT", "DMACT", "BSPACT", "BSPWLK", "VILACT",
    "NOWAY", "BAREXP", "PUNCH", "HOOF", "METAL", "CHGUN", "TINK", "BDOPN",
    "BDCLS", "ITMBK", "FLAME", "FLAMST", "GETPOW", "BOSPIT", "BOSCUB", "BOSSIT",
    "BOSPN", "BOSDTH", "MANATK", "MANDTH", "SSSIT", "SSDTH", "KEENPN", "KEENDT",
    "SKEACT", "SKESIT", "SKEATK", "RADIO",
];

/// Sounds appended by MBF.
pub(super) static SOUNDS_MBF: &[&str] = &[
    "DGSIT", "DGATK", "DGACT", "DGDTH", "DGPAIN",
];

/// Sounds of the extended tables, starting at [`super::SOUND_INDEX_EXTENDED_START`].
pub(super) static SOUNDS_EXTENDED: &[&str] = &[
    "FRE000", "FRE001", "FRE002", "FRE003", "FRE004", "FRE005", "FRE006", "FRE007",
    "FRE008", "FRE009", "FRE010", "FRE011", "FRE012", "FRE013", "FRE014", "FRE015",
    "FRE016", "FRE017", "FRE018", "FRE019", "FRE020", "FRE021", "FRE022", "FRE023",
    "FRE024", "FRE025", "FRE026", "FRE027", "FRE028", "FRE029", "FRE030", "FRE031",
    "FRE032", "FRE033", "FRE034", "FRE035", "FRE036", "FRE037", "FRE038", "FRE039",
    "FRE040", "FRE041", "FRE042", "FRE043", "FRE044", "FRE045", "FRE046", "FRE047",
    "FRE048", "FRE049", "FRE050", "FRE051", "FRE052", "FRE053", "FRE054", "FRE055",
    "FRE056", "FRE057", "FRE058", "FRE059", "FRE060", "FRE061", "FRE062", "FRE063",
    "FRE064", "FRE065", "FRE066", "FRE067", "FRE068", "FRE069", "FRE070", "FRE071",
    "FRE072", "FRE073", "FRE074", "FRE075", "FRE076", "FRE077", "FRE078", "FRE079",
    "FRE080", "FRE081", "FRE082", "FRE083", "FRE084", "FRE085", "FRE086", "FRE087",
    "FRE088", "FRE089", "FRE090", "FRE091", "FRE092", "FRE093", "FRE094", "FRE095",
    "FRE096", "FRE097", "FRE098", "FRE099", "FRE100", "FRE101", "FRE102", "FRE103",
    "FRE104", "FRE105", "FRE106", "FRE107", "FRE108", "FRE109", "FRE110", "FRE111",
    "FRE112", "FRE113", "FRE114", "FRE115", "FRE116", "FRE117", "FRE118", "FRE119",
    "FRE120", "FRE121", "FRE122", "FRE123", "FRE124", "FRE125", "FRE126", "FRE127",
    "FRE128", "FRE129", "FRE130", "FRE131", "FRE132", "FRE133", "FRE134", "FRE135",
    "FRE136", "FRE137", "FRE138", "FRE139", "FRE140", "FRE141", "FRE142", "FRE143",
    "FRE144", "FRE145", "FRE146", "FRE147", "FRE148", "FRE149", "FRE150", "FRE151",
    "FRE152", "FRE153", "FRE154", "FRE155", "FRE156", "FRE157", "FRE158", "FRE159",
    "FRE160", "FRE161", "FRE162", "FRE163", "FRE164", "FRE165", "FRE166", "FRE167",
    "FRE168", "FRE169", "FRE170", "FRE171", "FRE172", "FRE173", "FRE174", "FRE175",
    "FRE176", "FRE177", "FRE178", "FRE179", "FRE180", "FRE181", "FRE182", "FRE183",
    "FRE184", "FRE185", "FRE186", "FRE187", "FRE188", "FRE189", "FRE190", "FRE191",
    "FRE192", "FRE193", "FRE194", "FRE195", "FRE196", "FRE197", "FRE198", "FRE199",
];

