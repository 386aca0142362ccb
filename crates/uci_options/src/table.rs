//! Hard-coded option table. Rebuilt from these defaults at every start.

use crate::option::{ChangeAction, OptionId, UciOption};

/// Upper bound of the `Threads` option.
pub const MAX_THREADS: i32 = 512;

/// Upper bound of the `Hash` option, in kB.
#[cfg(target_pointer_width = "64")]
pub const MAX_HASH_KB: i32 = 33_554_432;
#[cfg(not(target_pointer_width = "64"))]
pub const MAX_HASH_KB: i32 = 2048;

/// Largest tablebase piece count a 32-bit build can address.
const SYZYGY_LIMIT_32BIT: i32 = 5;

pub const DEFAULT_EVAL_FILE: &str = "nn-default.nnue";

pub(crate) fn default_table() -> Vec<UciOption> {
    use OptionId as Id;

    let mut table = vec![
        UciOption::spin(Id::Contempt, "Contempt", 24, -100, 100),
        UciOption::combo(
            Id::AnalysisContempt,
            "Analysis Contempt",
            "Off var Off var White var Black",
        ),
        UciOption::spin(Id::Threads, "Threads", 1, 1, MAX_THREADS).on_change(ChangeAction::Threads),
        // kB, not MB
        UciOption::spin(Id::Hash, "Hash", 1024, 64, MAX_HASH_KB).on_change(ChangeAction::HashSize),
        UciOption::button(Id::ClearHash, "Clear Hash").on_change(ChangeAction::ClearHash),
        UciOption::check(Id::Ponder, "Ponder", false),
        UciOption::spin(Id::MultiPv, "MultiPV", 1, 1, 500),
        UciOption::spin(Id::SkillLevel, "Skill Level", 20, 0, 20),
        UciOption::spin(Id::MoveOverhead, "Move Overhead", 10, 0, 5000),
        UciOption::spin(Id::SlowMover, "Slow Mover", 100, 10, 1000),
        UciOption::spin(Id::NodesTime, "nodestime", 0, 0, 10000),
        UciOption::check(Id::AnalyseMode, "UCI_AnalyseMode", false),
        UciOption::check(Id::Chess960, "UCI_Chess960", false),
        UciOption::string(Id::SyzygyPath, "SyzygyPath", ""),
        UciOption::spin(Id::SyzygyProbeDepth, "SyzygyProbeDepth", 1, 1, 100),
        UciOption::check(Id::Syzygy50MoveRule, "Syzygy50MoveRule", true),
        UciOption::spin(Id::SyzygyProbeLimit, "SyzygyProbeLimit", 7, 0, 7),
        UciOption::string(Id::EvalFile, "EvalFile", DEFAULT_EVAL_FILE),
        UciOption::combo(Id::UseNnue, "Use NNUE", "Hybrid var Hybrid var Pure var Classical"),
        UciOption::check(Id::LargePages, "LargePages", true).on_change(ChangeAction::LargePages),
    ];

    if cfg!(not(target_pointer_width = "64")) {
        let limit = &mut table[Id::SyzygyProbeLimit.index()];
        limit.default = SYZYGY_LIMIT_32BIT;
        limit.max = SYZYGY_LIMIT_32BIT;
    }

    table
}
