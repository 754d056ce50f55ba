// Generated from the DeHackEd reference tables. Edit with care.

use super::{ThingRow, thing};

// columns: name, ednum, health, speed, radius, height, damage, reaction time, pain chance, bits, mass,
//          frames [spawn, see, pain, melee, missile, death, xdeath, raise],
//          sounds [see, attack, pain, death, active], dropped item
pub(super) static VANILLA: &[ThingRow] = &[
    thing("Player", -1, 100, 0, 16, 56, 0, 0, 255, 0x02000C06, 100, [149, 150, 156, 0, 154, 158, 165, 0], [0, 0, 25, 57, 0], 0),
    thing("Trooper", 3004, 20, 8, 20, 56, 0, 8, 200, 0x00400006, 100, [174, 176, 187, 0, 184, 189, 194, 203], [36, 1, 27, 59, 75], 64),
    thing("Sargeant", 9, 30, 8, 20, 56, 0, 8, 170, 0x00400006, 100, [207, 209, 220, 0, 217, 222, 227, 236], [37, 0, 27, 60, 75], 78),
    thing("Archvile", 64, 700, 15, 20, 56, 0, 8, 10, 0x00400006, 500, [241, 243, 269, 0, 255, 271, 0, 0], [48, 0, 28, 71, 80], 0),
    thing("Archvile attack", -1, 1000, 0, 20, 16, 0, 8, 0, 0x00000210, 100, [281, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Revenant", 66, 300, 10, 20, 56, 0, 8, 100, 0x00400006, 500, [321, 323, 343, 335, 339, 345, 0, 351], [106, 0, 27, 74, 105], 0),
    thing("Revenant fireball", -1, 1000, 10, 11, 8, 10, 8, 0, 0x00010610, 100, [316, 0, 0, 0, 0, 318, 0, 0], [107, 0, 0, 82, 0], 0),
    thing("Fireball trail", -1, 1000, 0, 20, 16, 0, 8, 0, 0x00000210, 100, [311, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Mancubus", 67, 600, 8, 48, 64, 0, 8, 80, 0x00400006, 1000, [362, 364, 386, 0, 376, 388, 0, 398], [49, 0, 29, 100, 75], 0),
    thing("Mancubus fireball", -1, 1000, 20, 6, 8, 8, 8, 0, 0x00010610, 100, [357, 0, 0, 0, 0, 359, 0, 0], [16, 0, 0, 17, 0], 0),
    thing("Chaingun Sargeant", 65, 70, 8, 20, 56, 0, 8, 170, 0x00400006, 100, [406, 408, 420, 0, 416, 422, 429, 435], [37, 0, 27, 60, 75], 74),
    thing("Imp", 3001, 60, 8, 20, 56, 0, 8, 200, 0x00400006, 100, [442, 444, 455, 452, 452, 457, 462, 470], [39, 0, 27, 62, 76], 0),
    thing("Demon", 3002, 150, 10, 30, 56, 0, 8, 180, 0x00400006, 400, [475, 477, 488, 485, 0, 490, 0, 496], [41, 52, 26, 64, 77], 0),
    thing("Spectre", 58, 150, 10, 30, 56, 0, 8, 180, 0x00440006, 400, [475, 477, 488, 485, 0, 490, 0, 496], [41, 52, 26, 64, 77], 0),
    thing("Cacodemon", 3005, 400, 8, 31, 56, 0, 8, 128, 0x00404206, 400, [502, 503, 507, 0, 504, 510, 0, 516], [42, 0, 26, 65, 77], 0),
    thing("Baron of Hell", 3003, 1000, 8, 24, 64, 0, 8, 50, 0x00400006, 1000, [527, 529, 540, 537, 537, 542, 0, 549], [43, 0, 26, 67, 77], 0),
    thing("Baron fireball", -1, 1000, 15, 6, 8, 8, 8, 0, 0x00010610, 100, [522, 0, 0, 0, 0, 524, 0, 0], [16, 0, 0, 17, 0], 0),
    thing("Hell Knight", 69, 500, 8, 24, 64, 0, 8, 50, 0x00400006, 1000, [556, 558, 569, 566, 566, 571, 0, 578], [47, 0, 26, 72, 77], 0),
    thing("Lost Soul", 3006, 100, 8, 16, 56, 3, 8, 256, 0x00004206, 50, [585, 587, 593, 0, 589, 595, 0, 0], [0, 51, 26, 17, 77], 0),
    thing("Spiderdemon", 7, 3000, 12, 128, 100, 0, 8, 40, 0x00400006, 1000, [601, 603, 619, 0, 615, 621, 0, 0], [45, 2, 26, 69, 77], 0),
    thing("Arachnotron", 68, 500, 12, 64, 64, 0, 8, 128, 0x00400006, 600, [632, 634, 651, 0, 647, 653, 0, 660], [46, 0, 26, 70, 78], 0),
    thing("Cyberdemon", 16, 4000, 16, 40, 110, 0, 8, 20, 0x00400006, 1000, [674, 676, 690, 0, 684, 691, 0, 0], [44, 0, 26, 68, 77], 0),
    thing("Pain Elemental", 71, 400, 8, 31, 56, 0, 8, 128, 0x00404206, 400, [701, 702, 712, 0, 708, 714, 0, 720], [50, 0, 30, 73, 77], 0),
    thing("SS Nazi", 84, 50, 8, 20, 56, 0, 8, 170, 0x00400006, 100, [726, 728, 742, 0, 736, 744, 749, 758], [101, 0, 27, 102, 75], 64),
    thing("Commander Keen", 72, 100, 0, 16, 72, 0, 8, 256, 0x00400306, 10000000, [763, 0, 776, 0, 0, 764, 0, 0], [0, 0, 103, 104, 0], 0),
    thing("Big Brain", 88, 250, 0, 16, 16, 0, 8, 255, 0x00000006, 10000000, [778, 0, 779, 0, 0, 780, 0, 0], [0, 0, 97, 98, 0], 0),
    thing("Demon spawner", 89, 1000, 0, 20, 32, 0, 8, 0, 0x00000018, 100, [784, 785, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Demon spawn spot", 87, 1000, 0, 20, 32, 0, 8, 0, 0x00000018, 100, [0, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Demon spawn cube", -1, 1000, 10, 6, 32, 3, 8, 0, 0x00011610, 100, [787, 0, 0, 0, 0, 0, 0, 0], [94, 0, 0, 17, 0], 0),
    thing("Demon spawn fire", -1, 1000, 0, 20, 16, 0, 8, 0, 0x00000210, 100, [791, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Barrel", 2035, 20, 0, 10, 42, 0, 8, 0, 0x00080006, 100, [806, 0, 0, 0, 0, 808, 0, 0], [0, 0, 0, 82, 0], 0),
    thing("Imp fireball", -1, 1000, 10, 6, 8, 3, 8, 0, 0x00010610, 100, [97, 0, 0, 0, 0, 99, 0, 0], [16, 0, 0, 17, 0], 0),
    thing("Caco fireball", -1, 1000, 10, 6, 8, 5, 8, 0, 0x00010610, 100, [102, 0, 0, 0, 0, 104, 0, 0], [16, 0, 0, 17, 0], 0),
    thing("Rocket in flight", -1, 1000, 20, 11, 8, 20, 8, 0, 0x00010610, 100, [114, 0, 0, 0, 0, 127, 0, 0], [14, 0, 0, 82, 0], 0),
    thing("Plasma projectile", -1, 1000, 25, 13, 8, 5, 8, 0, 0x00010610, 100, [107, 0, 0, 0, 0, 109, 0, 0], [8, 0, 0, 17, 0], 0),
    thing("BFG projectile", -1, 1000, 25, 13, 8, 100, 8, 0, 0x00010610, 100, [115, 0, 0, 0, 0, 117, 0, 0], [0, 0, 0, 15, 0], 0),
    thing("Arachnotron projectile", -1, 1000, 25, 13, 8, 5, 8, 0, 0x00010610, 100, [667, 0, 0, 0, 0, 669, 0, 0], [8, 0, 0, 17, 0], 0),
    thing("Bullet puff", -1, 1000, 0, 20, 16, 0, 8, 0, 0x00000210, 100, [93, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Blood splat", -1, 1000, 0, 20, 16, 0, 8, 0, 0x00000010, 100, [90, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Teleport fog", -1, 1000, 0, 20, 16, 0, 8, 0, 0x00000210, 100, [130, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Item respawn fog", -1, 1000, 0, 20, 16, 0, 8, 0, 0x00000210, 100, [142, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Teleport exit", 14, 1000, 0, 20, 16, 0, 8, 0, 0x00000018, 100, [0, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("BFG impact", -1, 1000, 0, 20, 16, 0, 8, 0, 0x00000210, 100, [123, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Green armor", 2018, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [802, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Blue armor", 2019, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [804, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Health potion", 2014, 1000, 0, 20, 16, 0, 8, 0, 0x00800001, 100, [816, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Armor helmet", 2015, 1000, 0, 20, 16, 0, 8, 0, 0x00800001, 100, [822, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Blue keycard", 5, 1000, 0, 20, 16, 0, 8, 0, 0x02000001, 100, [828, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Red keycard", 13, 1000, 0, 20, 16, 0, 8, 0, 0x02000001, 100, [830, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Yellow keycard", 6, 1000, 0, 20, 16, 0, 8, 0, 0x02000001, 100, [832, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Yellow skull key", 39, 1000, 0, 20, 16, 0, 8, 0, 0x02000001, 100, [838, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Red skull key", 38, 1000, 0, 20, 16, 0, 8, 0, 0x02000001, 100, [836, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Blue skull key", 40, 1000, 0, 20, 16, 0, 8, 0, 0x02000001, 100, [834, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Stimpack", 2011, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [840, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Medical kit", 2012, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [841, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Soul sphere", 2013, 1000, 0, 20, 16, 0, 8, 0, 0x00800001, 100, [842, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Invulnerability", 2022, 1000, 0, 20, 16, 0, 8, 0, 0x00800001, 100, [848, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Berserk sphere", 2023, 1000, 0, 20, 16, 0, 8, 0, 0x00800001, 100, [852, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Blur sphere", 2024, 1000, 0, 20, 16, 0, 8, 0, 0x00800001, 100, [853, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Radiation suit", 2025, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [861, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Computer map", 2026, 1000, 0, 20, 16, 0, 8, 0, 0x00800001, 100, [862, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Lite amplification visor", 2045, 1000, 0, 20, 16, 0, 8, 0, 0x00800001, 100, [868, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Mega sphere", 83, 1000, 0, 20, 16, 0, 8, 0, 0x00800001, 100, [857, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Ammo clip", 2007, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [870, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Box of ammo", 2048, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [871, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Rocket", 2010, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [872, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Box of rockets", 2046, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [873, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Energy cell", 2047, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [874, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Energy cell pack", 17, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [875, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Shells", 2008, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [876, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Box of shells", 2049, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [877, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Backpack", 8, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [878, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("BFG 9000", 2006, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [879, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Chaingun", 2002, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [880, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Chainsaw", 2005, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [881, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Rocket launcher", 2003, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [882, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Plasma rifle", 2004, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [883, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Shotgun", 2001, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [884, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Super shotgun", 82, 1000, 0, 20, 16, 0, 8, 0, 0x00000001, 100, [885, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Tall lamp", 85, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [959, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Tall lamp 2", 86, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [963, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Short lamp", 2028, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [886, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Tall green pillar", 30, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [907, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Short green pillar", 31, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [908, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Tall red pillar", 32, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [909, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Short red pillar", 33, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [910, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Pillar with skull", 37, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [913, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Pillar with heart", 36, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [924, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Eye in symbol", 41, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [917, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Flaming skulls", 42, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [921, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Grey tree", 43, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [914, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Tall blue torch", 44, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [926, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Tall green torch", 45, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [930, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Tall red torch", 46, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [934, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Small blue torch", 55, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [938, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Small green torch", 56, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [942, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Small red torch", 57, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [946, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Brown stub", 47, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [906, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Technical column", 48, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [916, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Candle", 34, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [911, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Candelabra", 35, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [912, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Swaying body", 49, 1000, 0, 16, 68, 0, 8, 0, 0x00000302, 100, [888, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging arms out", 50, 1000, 0, 16, 84, 0, 8, 0, 0x00000302, 100, [902, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("One-legged body", 51, 1000, 0, 16, 84, 0, 8, 0, 0x00000302, 100, [903, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging torso", 52, 1000, 0, 16, 68, 0, 8, 0, 0x00000302, 100, [904, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging leg", 53, 1000, 0, 16, 52, 0, 8, 0, 0x00000302, 100, [905, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging arms out 2", 59, 1000, 0, 20, 84, 0, 8, 0, 0x00000300, 100, [902, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging torso 2", 60, 1000, 0, 20, 68, 0, 8, 0, 0x00000300, 100, [904, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("One-legged body 2", 61, 1000, 0, 20, 52, 0, 8, 0, 0x00000300, 100, [903, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging leg 2", 62, 1000, 0, 20, 52, 0, 8, 0, 0x00000300, 100, [905, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Swaying body 2", 63, 1000, 0, 20, 68, 0, 8, 0, 0x00000300, 100, [888, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Dead Cacodemon", 22, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [515, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Dead Marine", 15, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [164, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Dead Trooper", 18, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [193, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Dead Demon", 21, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [495, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Dead Lost Soul", 23, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [600, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Dead Imp", 20, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [461, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Dead Sargeant", 19, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [226, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Guts and bones", 10, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [173, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Guts and bones 2", 12, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [173, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Skewered heads", 28, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [894, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Pool of blood", 24, 1000, 0, 20, 16, 0, 8, 0, 0x00000000, 100, [895, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Pole with skull", 27, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [896, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Pile of skulls", 29, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [897, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Impaled body", 25, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [899, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Twitching body", 26, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [900, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Large tree", 54, 1000, 0, 32, 16, 0, 8, 0, 0x00000002, 100, [915, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Flaming barrel", 70, 1000, 0, 16, 16, 0, 8, 0, 0x00000002, 100, [813, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging body 1", 73, 1000, 0, 16, 88, 0, 8, 0, 0x00000302, 100, [950, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging body 2", 74, 1000, 0, 16, 88, 0, 8, 0, 0x00000302, 100, [951, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging body 3", 75, 1000, 0, 16, 64, 0, 8, 0, 0x00000302, 100, [952, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging body 4", 76, 1000, 0, 16, 64, 0, 8, 0, 0x00000302, 100, [953, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging body 5", 77, 1000, 0, 16, 64, 0, 8, 0, 0x00000302, 100, [954, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Hanging body 6", 78, 1000, 0, 16, 64, 0, 8, 0, 0x00000302, 100, [955, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Pool of blood 1", 79, 1000, 0, 20, 16, 0, 8, 0, 0x00000010, 100, [956, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Pool of blood 2", 80, 1000, 0, 20, 16, 0, 8, 0, 0x00000010, 100, [957, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Brain", 81, 1000, 0, 20, 16, 0, 8, 0, 0x00000010, 100, [958, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
];

pub(super) static BOOM: &[ThingRow] = &[
    thing("Boom pusher", 5001, 1000, 0, 8, 8, 0, 8, 0, 0x00000010, 10, [967, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Boom puller", 5002, 1000, 0, 8, 8, 0, 8, 0, 0x00000010, 10, [967, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
];

pub(super) static MBF: &[ThingRow] = &[
    thing("Dog", 888, 500, 10, 11, 28, 0, 8, 180, 0x00400006, 100, [972, 974, 985, 982, 0, 987, 0, 993], [109, 110, 113, 112, 111], 0),
    thing("Beta Plasma 1", -1, 1000, 25, 13, 8, 4, 8, 0, 0x20010610, 100, [1042, 0, 0, 0, 0, 1044, 0, 0], [8, 0, 0, 17, 0], 0),
    thing("Beta Plasma 2", -1, 1000, 25, 6, 8, 4, 8, 0, 0x20010610, 100, [1049, 0, 0, 0, 0, 1051, 0, 0], [8, 0, 0, 17, 0], 0),
    thing("Beta Sceptre", 2016, 1000, 0, 10, 16, 0, 8, 0, 0x00800001, 100, [1054, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
    thing("Beta Bible", 2017, 1000, 0, 20, 10, 0, 8, 0, 0x00800001, 100, [1055, 0, 0, 0, 0, 0, 0, 0], [0, 0, 0, 0, 0], 0),
];
