// Generated from the DeHackEd reference tables. Edit with care.

use crate::value::ValueType::*;
use crate::format::PointerKind::{self, *};
use crate::value::ValueType;

/// (mnemonic, kind, vanilla frame, is weapon pointer, parameters)
pub(super) static POINTERS: &[(&str, PointerKind, Option<i32>, bool, &[ValueType])] = &[
    // vanilla pointers, each with the first frame that runs it
    ("NULL", Doom19, Some(0), false, &[]),
    ("Light0", Doom19, Some(1), true, &[]),
    ("WeaponReady", Doom19, Some(2), true, &[]),
    ("Lower", Doom19, Some(3), true, &[]),
    ("Raise", Doom19, Some(4), true, &[]),
    ("Punch", Doom19, Some(6), true, &[]),
    ("ReFire", Doom19, Some(9), true, &[]),
    ("FirePistol", Doom19, Some(14), true, &[]),
    ("Light1", Doom19, Some(17), true, &[]),
    ("FireShotgun", Doom19, Some(22), true, &[]),
    ("Light2", Doom19, Some(31), true, &[]),
    ("FireShotgun2", Doom19, Some(36), true, &[]),
    ("CheckReload", Doom19, Some(38), true, &[]),
    ("OpenShotgun2", Doom19, Some(39), true, &[]),
    ("LoadShotgun2", Doom19, Some(41), true, &[]),
    ("CloseShotgun2", Doom19, Some(43), true, &[]),
    ("FireCGun", Doom19, Some(52), true, &[]),
    ("GunFlash", Doom19, Some(60), true, &[]),
    ("FireMissile", Doom19, Some(61), true, &[]),
    ("Saw", Doom19, Some(71), true, &[]),
    ("FirePlasma", Doom19, Some(77), true, &[]),
    ("BFGsound", Doom19, Some(84), true, &[]),
    ("FireBFG", Doom19, Some(86), true, &[]),
    ("BFGSpray", Doom19, Some(119), false, &[]),
    ("Explode", Doom19, Some(127), false, &[]),
    ("Pain", Doom19, Some(157), false, &[]),
    ("PlayerScream", Doom19, Some(159), false, &[]),
    ("Fall", Doom19, Some(160), false, &[]),
    ("XScream", Doom19, Some(166), false, &[]),
    ("Look", Doom19, Some(174), false, &[]),
    ("Chase", Doom19, Some(176), false, &[]),
    ("FaceTarget", Doom19, Some(184), false, &[]),
    ("PosAttack", Doom19, Some(185), false, &[]),
    ("Scream", Doom19, Some(190), false, &[]),
    ("VileChase", Doom19, Some(243), false, &[]),
    ("VileStart", Doom19, Some(255), false, &[]),
    ("VileTarget", Doom19, Some(257), false, &[]),
    ("VileAttack", Doom19, Some(264), false, &[]),
    ("StartFire", Doom19, Some(281), false, &[]),
    ("Fire", Doom19, Some(282), false, &[]),
    ("FireCrackle", Doom19, Some(285), false, &[]),
    ("Tracer", Doom19, Some(316), false, &[]),
    ("SkelWhoosh", Doom19, Some(336), false, &[]),
    ("SkelFist", Doom19, Some(338), false, &[]),
    ("SkelMissile", Doom19, Some(341), false, &[]),
    ("FatRaise", Doom19, Some(376), false, &[]),
    ("FatAttack1", Doom19, Some(377), false, &[]),
    ("FatAttack2", Doom19, Some(380), false, &[]),
    ("FatAttack3", Doom19, Some(383), false, &[]),
    ("BossDeath", Doom19, Some(397), false, &[]),
    ("CPosAttack", Doom19, Some(417), false, &[]),
    ("CPosRefire", Doom19, Some(419), false, &[]),
    ("TroopAttack", Doom19, Some(454), false, &[]),
    ("SargAttack", Doom19, Some(487), false, &[]),
    ("HeadAttack", Doom19, Some(506), false, &[]),
    ("BruisAttack", Doom19, Some(539), false, &[]),
    ("SkullAttack", Doom19, Some(590), false, &[]),
    ("Metal", Doom19, Some(603), false, &[]),
    ("SPosAttack", Doom19, Some(218), false, &[]),
    ("SpidRefire", Doom19, Some(618), false, &[]),
    ("BabyMetal", Doom19, Some(635), false, &[]),
    ("BspiAttack", Doom19, Some(648), false, &[]),
    ("Hoof", Doom19, Some(676), false, &[]),
    ("CyberAttack", Doom19, Some(685), false, &[]),
    ("PainAttack", Doom19, Some(711), false, &[]),
    ("PainDie", Doom19, Some(718), false, &[]),
    ("KeenDie", Doom19, Some(774), false, &[]),
    ("BrainPain", Doom19, Some(779), false, &[]),
    ("BrainScream", Doom19, Some(780), false, &[]),
    ("BrainDie", Doom19, Some(783), false, &[]),
    ("BrainAwake", Doom19, Some(785), false, &[]),
    ("BrainSpit", Doom19, Some(786), false, &[]),
    ("SpawnSound", Doom19, Some(787), false, &[]),
    ("SpawnFly", Doom19, Some(788), false, &[]),
    ("BrainExplode", Doom19, Some(801), false, &[]),

    // MBF, parameters go to misc1/misc2
    ("Detonate", Mbf, None, false, &[]),
    ("Mushroom", Mbf, None, false, &[AngleFixed, Fixed]),
    ("Spawn", Mbf, None, false, &[Thing, Short]),
    ("Turn", Mbf, None, false, &[AngleInt]),
    ("Face", Mbf, None, false, &[AngleUInt]),
    ("Scratch", Mbf, None, false, &[Short, Sound]),
    ("PlaySound", Mbf, None, false, &[Sound, Bool]),
    ("RandomJump", Mbf, None, false, &[State, UInt]),
    ("LineEffect", Mbf, None, false, &[Short, Short]),
    ("Die", Mbf, None, false, &[]),
    ("BetaSkullAttack", Mbf, None, false, &[]),
    ("Stop", Mbf, None, false, &[]),
    ("FireOldBFG", Mbf, None, true, &[]),

    // MBF21, typed args
    ("SpawnObject", Mbf21, None, false, &[Thing, AngleFixed, Fixed, Fixed, Fixed, Fixed, Fixed, Fixed]),
    ("MonsterProjectile", Mbf21, None, false, &[Thing, AngleFixed, AngleFixed, Fixed, Fixed]),
    ("MonsterBulletAttack", Mbf21, None, false, &[AngleFixed, AngleFixed, UInt, UShort, UInt]),
    ("MonsterMeleeAttack", Mbf21, None, false, &[UShort, UInt, Sound, Fixed]),
    ("RadiusDamage", Mbf21, None, false, &[UInt, UInt]),
    ("NoiseAlert", Mbf21, None, false, &[]),
    ("HealChase", Mbf21, None, false, &[State, Sound]),
    ("SeekTracer", Mbf21, None, false, &[AngleFixed, AngleFixed]),
    ("FindTracer", Mbf21, None, false, &[AngleFixed, UInt]),
    ("ClearTracer", Mbf21, None, false, &[]),
    ("JumpIfHealthBelow", Mbf21, None, false, &[State, Int]),
    ("JumpIfTargetInSight", Mbf21, None, false, &[State, AngleFixed]),
    ("JumpIfTargetCloser", Mbf21, None, false, &[State, Fixed]),
    ("JumpIfTracerInSight", Mbf21, None, false, &[State, AngleFixed]),
    ("JumpIfTracerCloser", Mbf21, None, false, &[State, Fixed]),
    ("JumpIfFlagsSet", Mbf21, None, false, &[State, Flags, Flags]),
    ("AddFlags", Mbf21, None, false, &[Flags, Flags]),
    ("RemoveFlags", Mbf21, None, false, &[Flags, Flags]),
    ("WeaponProjectile", Mbf21, None, true, &[Thing, AngleFixed, AngleFixed, Fixed, Fixed]),
    ("WeaponBulletAttack", Mbf21, None, true, &[AngleFixed, AngleFixed, UInt, UShort, UInt]),
    ("WeaponMeleeAttack", Mbf21, None, true, &[UShort, UInt, Fixed, Sound, Fixed]),
    ("WeaponSound", Mbf21, None, true, &[Sound, Bool]),
    ("WeaponAlert", Mbf21, None, true, &[]),
    ("WeaponJump", Mbf21, None, true, &[State, UInt]),
    ("ConsumeAmmo", Mbf21, None, true, &[Short]),
    ("CheckAmmo", Mbf21, None, true, &[State, UShort]),
    ("RefireTo", Mbf21, None, true, &[State, Bool]),
    ("GunFlashTo", Mbf21, None, true, &[State, Bool]),
];
