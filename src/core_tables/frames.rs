// Generated from the DeHackEd reference tables. Edit with care.

/// Vanilla states that run an action, with the pointer they run.
///
/// These are the only states that own a code pointer in a Doom 1.9 patch.  DeHackEd numbers its
/// `Pointer` blocks by position in this list.
pub(super) static ACTION_FRAMES: &[(usize, &str)] = &[
    (1, "Light0"), (2, "WeaponReady"), (3, "Lower"), (4, "Raise"), (6, "Punch"), (9, "ReFire"),
    (10, "WeaponReady"), (11, "Lower"), (12, "Raise"), (14, "FirePistol"), (16, "ReFire"), (17, "Light1"),
    (18, "WeaponReady"), (19, "Lower"), (20, "Raise"), (22, "FireShotgun"), (29, "ReFire"), (30, "Light1"),
    (31, "Light2"), (32, "WeaponReady"), (33, "Lower"), (34, "Raise"), (36, "FireShotgun2"), (38, "CheckReload"),
    (39, "OpenShotgun2"), (41, "LoadShotgun2"), (43, "CloseShotgun2"), (44, "ReFire"), (47, "Light1"), (48, "Light2"),
    (49, "WeaponReady"), (50, "Lower"), (51, "Raise"), (52, "FireCGun"), (53, "FireCGun"), (54, "ReFire"),
    (55, "Light1"), (56, "Light2"), (57, "WeaponReady"), (58, "Lower"), (59, "Raise"), (60, "GunFlash"),
    (61, "FireMissile"), (62, "ReFire"), (63, "Light1"), (65, "Light2"), (66, "Light2"), (67, "WeaponReady"),
    (68, "WeaponReady"), (69, "Lower"), (70, "Raise"), (71, "Saw"), (72, "Saw"), (73, "ReFire"),
    (74, "WeaponReady"), (75, "Lower"), (76, "Raise"), (77, "FirePlasma"), (78, "ReFire"), (79, "Light1"),
    (80, "Light1"), (81, "WeaponReady"), (82, "Lower"), (83, "Raise"), (84, "BFGsound"), (85, "GunFlash"),
    (86, "FireBFG"), (87, "ReFire"), (88, "Light1"), (89, "Light2"), (119, "BFGSpray"), (127, "Explode"),
    (157, "Pain"), (159, "PlayerScream"), (160, "Fall"), (166, "XScream"), (167, "Fall"), (174, "Look"),
    (175, "Look"), (176, "Chase"), (177, "Chase"), (178, "Chase"), (179, "Chase"), (180, "Chase"),
    (181, "Chase"), (182, "Chase"), (183, "Chase"), (184, "FaceTarget"), (185, "PosAttack"), (188, "Pain"),
    (190, "Scream"), (191, "Fall"), (195, "XScream"), (196, "Fall"), (207, "Look"), (208, "Look"),
    (209, "Chase"), (210, "Chase"), (211, "Chase"), (212, "Chase"), (213, "Chase"), (214, "Chase"),
    (215, "Chase"), (216, "Chase"), (217, "FaceTarget"), (218, "SPosAttack"), (221, "Pain"), (223, "Scream"),
    (224, "Fall"), (228, "XScream"), (229, "Fall"), (241, "Look"), (242, "Look"), (243, "VileChase"),
    (244, "VileChase"), (245, "VileChase"), (246, "VileChase"), (247, "VileChase"), (248, "VileChase"), (249, "VileChase"),
    (250, "VileChase"), (251, "VileChase"), (252, "VileChase"), (253, "VileChase"), (254, "VileChase"), (255, "VileStart"),
    (256, "FaceTarget"), (257, "VileTarget"), (258, "FaceTarget"), (259, "FaceTarget"), (260, "FaceTarget"), (261, "FaceTarget"),
    (262, "FaceTarget"), (263, "FaceTarget"), (264, "VileAttack"), (270, "Pain"), (272, "Scream"), (273, "Fall"),
    (281, "StartFire"), (282, "Fire"), (283, "Fire"), (284, "Fire"), (285, "FireCrackle"), (286, "Fire"),
    (287, "Fire"), (288, "Fire"), (289, "Fire"), (290, "Fire"), (291, "Fire"), (292, "Fire"),
    (293, "Fire"), (294, "Fire"), (295, "Fire"), (296, "Fire"), (297, "Fire"), (298, "Fire"),
    (299, "FireCrackle"), (300, "Fire"), (301, "Fire"), (302, "Fire"), (303, "Fire"), (304, "Fire"),
    (305, "Fire"), (306, "Fire"), (307, "Fire"), (308, "Fire"), (309, "Fire"), (310, "Fire"),
    (316, "Tracer"), (317, "Tracer"), (321, "Look"), (322, "Look"), (323, "Chase"), (324, "Chase"),
    (325, "Chase"), (326, "Chase"), (327, "Chase"), (328, "Chase"), (329, "Chase"), (330, "Chase"),
    (331, "Chase"), (332, "Chase"), (333, "Chase"), (334, "Chase"), (335, "FaceTarget"), (336, "SkelWhoosh"),
    (337, "FaceTarget"), (338, "SkelFist"), (339, "FaceTarget"), (340, "FaceTarget"), (341, "SkelMissile"), (342, "FaceTarget"),
    (344, "Pain"), (347, "Scream"), (348, "Fall"), (362, "Look"), (363, "Look"), (364, "Chase"),
    (365, "Chase"), (366, "Chase"), (367, "Chase"), (368, "Chase"), (369, "Chase"), (370, "Chase"),
    (371, "Chase"), (372, "Chase"), (373, "Chase"), (374, "Chase"), (375, "Chase"), (376, "FatRaise"),
    (377, "FatAttack1"), (378, "FaceTarget"), (379, "FaceTarget"), (380, "FatAttack2"), (381, "FaceTarget"), (382, "FaceTarget"),
    (383, "FatAttack3"), (384, "FaceTarget"), (385, "FaceTarget"), (387, "Pain"), (389, "Scream"), (390, "Fall"),
    (397, "BossDeath"), (406, "Look"), (407, "Look"), (408, "Chase"), (409, "Chase"), (410, "Chase"),
    (411, "Chase"), (412, "Chase"), (413, "Chase"), (414, "Chase"), (415, "Chase"), (416, "FaceTarget"),
    (417, "CPosAttack"), (418, "CPosAttack"), (419, "CPosRefire"), (421, "Pain"), (423, "Scream"), (424, "Fall"),
    (430, "XScream"), (431, "Fall"), (442, "Look"), (443, "Look"), (444, "Chase"), (445, "Chase"),
    (446, "Chase"), (447, "Chase"), (448, "Chase"), (449, "Chase"), (450, "Chase"), (451, "Chase"),
    (452, "FaceTarget"), (453, "FaceTarget"), (454, "TroopAttack"), (456, "Pain"), (458, "Scream"), (460, "Fall"),
    (463, "XScream"), (465, "Fall"), (475, "Look"), (476, "Look"), (477, "Chase"), (478, "Chase"),
    (479, "Chase"), (480, "Chase"), (481, "Chase"), (482, "Chase"), (483, "Chase"), (484, "Chase"),
    (485, "FaceTarget"), (486, "FaceTarget"), (487, "SargAttack"), (489, "Pain"), (491, "Scream"), (494, "Fall"),
    (502, "Look"), (503, "Chase"), (504, "FaceTarget"), (505, "FaceTarget"), (506, "HeadAttack"), (508, "Pain"),
    (511, "Scream"), (514, "Fall"), (527, "Look"), (528, "Look"), (529, "Chase"), (530, "Chase"),
    (531, "Chase"), (532, "Chase"), (533, "Chase"), (534, "Chase"), (535, "Chase"), (536, "Chase"),
    (537, "FaceTarget"), (538, "FaceTarget"), (539, "BruisAttack"), (541, "Pain"), (543, "Scream"), (545, "Fall"),
    (548, "BossDeath"), (556, "Look"), (557, "Look"), (558, "Chase"), (559, "Chase"), (560, "Chase"),
    (561, "Chase"), (562, "Chase"), (563, "Chase"), (564, "Chase"), (565, "Chase"), (566, "FaceTarget"),
    (567, "FaceTarget"), (568, "BruisAttack"), (570, "Pain"), (572, "Scream"), (574, "Fall"), (585, "Look"),
    (586, "Look"), (587, "Chase"), (588, "Chase"), (589, "FaceTarget"), (590, "SkullAttack"), (594, "Pain"),
    (596, "Scream"), (598, "Fall"), (601, "Look"), (602, "Look"), (603, "Metal"), (604, "Chase"),
    (605, "Chase"), (606, "Chase"), (607, "Metal"), (608, "Chase"), (609, "Chase"), (610, "Chase"),
    (611, "Metal"), (612, "Chase"), (613, "Chase"), (614, "Chase"), (615, "FaceTarget"), (616, "SPosAttack"),
    (617, "SPosAttack"), (618, "SpidRefire"), (620, "Pain"), (621, "Scream"), (622, "Fall"), (631, "BossDeath"),
    (632, "Look"), (633, "Look"), (635, "BabyMetal"), (636, "Chase"), (637, "Chase"), (638, "Chase"),
    (639, "Chase"), (640, "Chase"), (641, "BabyMetal"), (642, "Chase"), (643, "Chase"), (644, "Chase"),
    (645, "Chase"), (646, "Chase"), (647, "FaceTarget"), (648, "BspiAttack"), (650, "SpidRefire"), (652, "Pain"),
    (653, "Scream"), (654, "Fall"), (659, "BossDeath"), (674, "Look"), (675, "Look"), (676, "Hoof"),
    (677, "Chase"), (678, "Chase"), (679, "Chase"), (680, "Chase"), (681, "Chase"), (682, "Metal"),
    (683, "Chase"), (684, "FaceTarget"), (685, "CyberAttack"), (686, "FaceTarget"), (687, "CyberAttack"), (688, "FaceTarget"),
    (689, "CyberAttack"), (690, "Pain"), (692, "Scream"), (697, "Fall"), (700, "BossDeath"), (701, "Look"),
    (702, "Chase"), (703, "Chase"), (704, "Chase"), (705, "Chase"), (706, "Chase"), (707, "Chase"),
    (708, "FaceTarget"), (709, "FaceTarget"), (710, "FaceTarget"), (711, "PainAttack"), (713, "Pain"), (715, "Scream"),
    (718, "PainDie"), (726, "Look"), (727, "Look"), (728, "Chase"), (729, "Chase"), (730, "Chase"),
    (731, "Chase"), (732, "Chase"), (733, "Chase"), (734, "Chase"), (735, "Chase"), (736, "FaceTarget"),
    (737, "FaceTarget"), (738, "CPosAttack"), (739, "FaceTarget"), (740, "CPosAttack"), (741, "CPosRefire"), (743, "Pain"),
    (745, "Scream"), (746, "Fall"), (750, "XScream"), (751, "Fall"), (766, "Scream"), (774, "KeenDie"),
    (777, "Pain"), (779, "BrainPain"), (780, "BrainScream"), (783, "BrainDie"), (784, "Look"), (785, "BrainAwake"),
    (786, "BrainSpit"), (787, "SpawnSound"), (788, "SpawnFly"), (789, "SpawnFly"), (790, "SpawnFly"), (791, "Fire"),
    (792, "Fire"), (793, "Fire"), (794, "Fire"), (795, "Fire"), (796, "Fire"), (797, "Fire"),
    (798, "Fire"), (801, "BrainExplode"), (809, "Scream"), (811, "Explode"),
];
