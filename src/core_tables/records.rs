// Generated from the DeHackEd reference tables. Edit with care.

use crate::context::AmmoType::{self, *};
use crate::flags::weapon_mbf21::*;

/// (priority, singular) for sounds 1 and up.
pub(super) static SOUNDS: &[(i32, bool)] = &[
    (64, false), (64, false), (64, false), (64, false), (64, false), (64, false),
    (64, false), (64, false), (64, false), (64, false), (118, false), (64, false),
    (64, false), (64, false), (70, false), (70, false), (70, false), (100, false),
    (100, false), (100, false), (100, false), (119, false), (78, false), (78, false),
    (96, false), (96, false), (96, false), (96, false), (96, false), (96, false),
    (78, false), (78, true), (78, true), (96, false), (32, false), (98, true),
    (98, true), (98, true), (98, true), (98, true), (98, true), (98, true),
    (94, true), (92, true), (90, true), (90, true), (90, true), (90, true),
    (90, true), (90, true), (70, false), (70, false), (70, false), (70, false),
    (70, false), (70, false), (32, false), (32, false), (70, false), (70, false),
    (70, false), (70, false), (70, false), (70, false), (70, false), (70, false),
    (32, false), (32, false), (32, false), (32, false), (32, false), (32, false),
    (32, false), (32, false), (120, true), (120, true), (120, true), (100, true),
    (100, true), (100, true), (78, false), (60, false), (64, false), (70, false),
    (70, false), (64, false), (60, false), (100, false), (100, false), (100, false),
    (32, false), (32, false), (60, false), (70, false), (70, false), (70, false),
    (70, false), (70, false), (70, false), (70, false), (70, false), (70, false),
    (70, false), (70, false), (70, false), (70, false), (70, false), (60, false),
];

pub(super) static SOUNDS_MBF: &[(i32, bool)] = &[
    (98, false), (70, false), (120, false), (70, false), (96, false),
];

/// (name, max, pickup)
pub(super) static AMMO: &[(&str, i32, i32)] = &[
    ("Bullets", 200, 10),
    ("Shells", 50, 4),
    ("Cells", 300, 20),
    ("Rockets", 50, 1),
];

/// (name, ammo, [raise, lower, ready, fire, flash], ammo per shot, MBF21 flags)
pub(super) static WEAPONS: &[(&str, AmmoType, [i32; 5], i32, u32)] = &[
    ("Fist", Infinite, [4, 3, 2, 5, 0], 1, FLEEMELEE | AUTOSWITCHFROM | NOAUTOSWITCHTO),
    ("Pistol", Bullets, [12, 11, 10, 13, 17], 1, AUTOSWITCHFROM),
    ("Shotgun", Shells, [20, 19, 18, 21, 30], 1, 0),
    ("Chaingun", Bullets, [51, 50, 49, 52, 55], 1, 0),
    ("Rocket launcher", Rockets, [59, 58, 57, 60, 63], 1, NOAUTOFIRE),
    ("Plasma rifle", Cells, [76, 75, 74, 77, 79], 1, 0),
    ("BFG9000", Cells, [83, 82, 81, 84, 88], 40, NOAUTOFIRE),
    ("Chainsaw", Infinite, [70, 69, 67, 71, 0], 1, NOTHRUST | FLEEMELEE | NOAUTOSWITCHTO),
    ("Super-shotgun", Shells, [34, 33, 32, 35, 47], 1, 0),
];

/// States appended by MBF, starting at [`super::STATE_INDEX_MBF_START`].
/// (sprite, frame, bright, next, duration, pointer)
pub(super) static STATES_MBF: &[(i32, i32, bool, i32, i32, &str)] = &[
    (22, 1, true, 965, 1000, "Die"),
    (22, 1, true, 970, 4, "Scream"),
    (22, 2, true, 971, 6, "Detonate"),
    (22, 3, true, 0, 10, "NULL"),
    (139, 0, false, 973, 10, "Look"),
    (139, 1, false, 972, 10, "Look"),
    (139, 0, false, 975, 2, "Chase"),
    (139, 0, false, 976, 2, "Chase"),
    (139, 1, false, 977, 2, "Chase"),
    (139, 1, false, 978, 2, "Chase"),
    (139, 2, false, 979, 2, "Chase"),
    (139, 2, false, 980, 2, "Chase"),
    (139, 3, false, 981, 2, "Chase"),
    (139, 3, false, 974, 2, "Chase"),
    (139, 4, false, 983, 8, "FaceTarget"),
    (139, 5, false, 984, 8, "FaceTarget"),
    (139, 6, false, 974, 8, "SargAttack"),
    (139, 7, false, 986, 2, "NULL"),
    (139, 7, false, 974, 2, "Pain"),
    (139, 8, false, 988, 8, "NULL"),
    (139, 9, false, 989, 8, "Scream"),
    (139, 10, false, 990, 4, "NULL"),
    (139, 11, false, 991, 4, "Fall"),
    (139, 12, false, 992, 4, "NULL"),
    (139, 13, false, 0, -1, "NULL"),
    (139, 13, false, 994, 5, "NULL"),
    (139, 12, false, 995, 5, "NULL"),
    (139, 11, false, 996, 5, "NULL"),
    (139, 10, false, 997, 5, "NULL"),
    (139, 9, false, 998, 5, "NULL"),
    (139, 8, false, 974, 5, "NULL"),
    (14, 0, false, 1000, 10, "BFGsound"),
    (14, 1, false, 1001, 1, "FireOldBFG"),
    (14, 1, false, 1002, 1, "FireOldBFG"),
    (14, 1, false, 1003, 1, "FireOldBFG"),
    (14, 1, false, 1004, 1, "FireOldBFG"),
    (14, 1, false, 1005, 1, "FireOldBFG"),
    (14, 1, false, 1006, 1, "FireOldBFG"),
    (14, 1, false, 1007, 1, "FireOldBFG"),
    (14, 1, false, 1008, 1, "FireOldBFG"),
    (14, 1, false, 1009, 1, "FireOldBFG"),
    (14, 1, false, 1010, 1, "FireOldBFG"),
    (14, 1, false, 1011, 1, "FireOldBFG"),
    (14, 1, false, 1012, 1, "FireOldBFG"),
    (14, 1, false, 1013, 1, "FireOldBFG"),
    (14, 1, false, 1014, 1, "FireOldBFG"),
    (14, 1, false, 1015, 1, "FireOldBFG"),
    (14, 1, false, 1016, 1, "FireOldBFG"),
    (14, 1, false, 1017, 1, "FireOldBFG"),
    (14, 1, false, 1018, 1, "FireOldBFG"),
    (14, 1, false, 1019, 1, "FireOldBFG"),
    (14, 1, false, 1020, 1, "FireOldBFG"),
    (14, 1, false, 1021, 1, "FireOldBFG"),
    (14, 1, false, 1022, 1, "FireOldBFG"),
    (14, 1, false, 1023, 1, "FireOldBFG"),
    (14, 1, false, 1024, 1, "FireOldBFG"),
    (14, 1, false, 1025, 1, "FireOldBFG"),
    (14, 1, false, 1026, 1, "FireOldBFG"),
    (14, 1, false, 1027, 1, "FireOldBFG"),
    (14, 1, false, 1028, 1, "FireOldBFG"),
    (14, 1, false, 1029, 1, "FireOldBFG"),
    (14, 1, false, 1030, 1, "FireOldBFG"),
    (14, 1, false, 1031, 1, "FireOldBFG"),
    (14, 1, false, 1032, 1, "FireOldBFG"),
    (14, 1, false, 1033, 1, "FireOldBFG"),
    (14, 1, false, 1034, 1, "FireOldBFG"),
    (14, 1, false, 1035, 1, "FireOldBFG"),
    (14, 1, false, 1036, 1, "FireOldBFG"),
    (14, 1, false, 1037, 1, "FireOldBFG"),
    (14, 1, false, 1038, 1, "FireOldBFG"),
    (14, 1, false, 1039, 1, "FireOldBFG"),
    (14, 1, false, 1040, 1, "FireOldBFG"),
    (14, 1, false, 1041, 0, "Light0"),
    (14, 1, false, 81, 20, "ReFire"),
    (140, 0, true, 1043, 6, "NULL"),
    (140, 1, true, 1042, 6, "NULL"),
    (140, 2, true, 1045, 4, "NULL"),
    (140, 3, true, 1046, 4, "NULL"),
    (140, 4, true, 1047, 4, "NULL"),
    (140, 5, true, 1048, 4, "NULL"),
    (140, 6, true, 0, 4, "NULL"),
    (141, 0, true, 1050, 4, "NULL"),
    (141, 1, true, 1049, 4, "NULL"),
    (141, 2, true, 1052, 6, "NULL"),
    (141, 3, true, 1053, 6, "NULL"),
    (141, 4, true, 0, 6, "NULL"),
    (142, 0, false, 1054, 6, "NULL"),
    (143, 0, false, 1055, 6, "NULL"),
    (44, 0, false, 1056, 10, "Look"),
    (44, 1, false, 1058, 5, "Chase"),
    (44, 2, false, 1059, 5, "Chase"),
    (44, 3, false, 1060, 5, "Chase"),
    (44, 0, false, 1057, 5, "Chase"),
    (44, 4, false, 1062, 4, "FaceTarget"),
    (44, 5, false, 1063, 5, "BetaSkullAttack"),
    (44, 5, false, 1057, 4, "NULL"),
    (44, 6, false, 1065, 4, "NULL"),
    (44, 7, false, 1057, 2, "Pain"),
    (44, 8, false, 1057, 4, "NULL"),
    (44, 9, false, 1068, 5, "NULL"),
    (44, 10, false, 1069, 5, "NULL"),
    (44, 11, false, 1070, 5, "NULL"),
    (44, 12, false, 1071, 5, "NULL"),
    (44, 13, false, 1072, 5, "Scream"),
    (44, 14, false, 1073, 5, "NULL"),
    (44, 15, false, 1074, 5, "Fall"),
    (44, 16, false, 1074, 5, "Stop"),
    (22, 1, true, 128, 8, "Mushroom"),
];
