//! Option types: identity, kind, and the per-option record.

use std::fmt;

/// Separator between the entries of a combo specification.
pub(crate) const COMBO_SEPARATOR: &str = " var";

/// Every slot of the option table, in table order.
///
/// The discriminant is the slot index, so an id doubles as the index for the
/// trusted [`OptionsRegistry::value`](crate::OptionsRegistry::value) and
/// [`OptionsRegistry::set_value`](crate::OptionsRegistry::set_value) paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum OptionId {
    Contempt,
    AnalysisContempt,
    Threads,
    Hash,
    ClearHash,
    Ponder,
    MultiPv,
    SkillLevel,
    MoveOverhead,
    SlowMover,
    NodesTime,
    AnalyseMode,
    Chess960,
    SyzygyPath,
    SyzygyProbeDepth,
    Syzygy50MoveRule,
    SyzygyProbeLimit,
    EvalFile,
    UseNnue,
    LargePages,
}

impl OptionId {
    pub const COUNT: usize = 20;

    pub const ALL: [OptionId; Self::COUNT] = [
        OptionId::Contempt,
        OptionId::AnalysisContempt,
        OptionId::Threads,
        OptionId::Hash,
        OptionId::ClearHash,
        OptionId::Ponder,
        OptionId::MultiPv,
        OptionId::SkillLevel,
        OptionId::MoveOverhead,
        OptionId::SlowMover,
        OptionId::NodesTime,
        OptionId::AnalyseMode,
        OptionId::Chess960,
        OptionId::SyzygyPath,
        OptionId::SyzygyProbeDepth,
        OptionId::Syzygy50MoveRule,
        OptionId::SyzygyProbeLimit,
        OptionId::EvalFile,
        OptionId::UseNnue,
        OptionId::LargePages,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Type tag of an option, as announced to the GUI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean, set with the literal tokens `true` / `false`.
    Check,
    /// Integer within `[min, max]`.
    Spin,
    /// Trigger with no value.
    Button,
    /// Free text.
    String,
    /// One of a fixed list of strings.
    Combo,
}

impl OptionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Check => "check",
            OptionKind::Spin => "spin",
            OptionKind::Button => "button",
            OptionKind::String => "string",
            OptionKind::Combo => "combo",
        }
    }
}

/// Which staged setting an option feeds when it changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeAction {
    ClearHash,
    HashSize,
    Threads,
    LargePages,
}

/// One entry of the option table.
#[derive(Debug, Clone)]
pub struct UciOption {
    pub(crate) id: OptionId,
    pub(crate) name: &'static str,
    pub(crate) kind: OptionKind,
    pub(crate) default: i32,
    pub(crate) min: i32,
    pub(crate) max: i32,
    /// Default text for strings; full `X var A var B` spec for combos.
    pub(crate) default_string: &'static str,
    pub(crate) value: i32,
    pub(crate) string_value: String,
    pub(crate) on_change: Option<ChangeAction>,
    pub(crate) enabled: bool,
}

impl UciOption {
    const fn new(id: OptionId, name: &'static str, kind: OptionKind) -> Self {
        Self {
            id,
            name,
            kind,
            default: 0,
            min: 0,
            max: 0,
            default_string: "",
            value: 0,
            string_value: String::new(),
            on_change: None,
            enabled: true,
        }
    }

    pub(crate) const fn spin(id: OptionId, name: &'static str, def: i32, min: i32, max: i32) -> Self {
        let mut opt = Self::new(id, name, OptionKind::Spin);
        opt.default = def;
        opt.min = min;
        opt.max = max;
        opt
    }

    pub(crate) const fn check(id: OptionId, name: &'static str, def: bool) -> Self {
        let mut opt = Self::new(id, name, OptionKind::Check);
        opt.default = def as i32;
        opt
    }

    pub(crate) const fn button(id: OptionId, name: &'static str) -> Self {
        Self::new(id, name, OptionKind::Button)
    }

    pub(crate) const fn string(id: OptionId, name: &'static str, def: &'static str) -> Self {
        let mut opt = Self::new(id, name, OptionKind::String);
        opt.default_string = def;
        opt
    }

    pub(crate) const fn combo(id: OptionId, name: &'static str, spec: &'static str) -> Self {
        let mut opt = Self::new(id, name, OptionKind::Combo);
        opt.default_string = spec;
        opt
    }

    pub(crate) const fn on_change(mut self, action: ChangeAction) -> Self {
        self.on_change = Some(action);
        self
    }

    pub fn id(&self) -> OptionId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn default_value(&self) -> i32 {
        self.default
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn default_string(&self) -> &'static str {
        self.default_string
    }

    /// Current numeric value (check and spin options).
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Current text (string and combo options).
    pub fn string_value(&self) -> &str {
        &self.string_value
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Legal choices of a combo, in listed order. Empty for other kinds.
    pub fn choices(&self) -> impl Iterator<Item = &'static str> + '_ {
        let spec = if self.kind == OptionKind::Combo {
            self.default_string
        } else {
            ""
        };
        spec.split(COMBO_SEPARATOR)
            .skip(1)
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Default entry of a combo spec: the text before the first separator,
    /// lower-cased.
    pub(crate) fn combo_default(&self) -> String {
        let spec = self.default_string;
        let head = spec
            .find(COMBO_SEPARATOR)
            .map_or(spec, |end| &spec[..end]);
        head.to_lowercase()
    }
}

impl fmt::Display for UciOption {
    /// The `option name ...` line announced in reply to `uci`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "option name {} type {}", self.name, self.kind.as_str())?;
        match self.kind {
            OptionKind::Check => {
                write!(f, " default {}", if self.default != 0 { "true" } else { "false" })
            }
            OptionKind::Spin => {
                write!(f, " default {} min {} max {}", self.default, self.min, self.max)
            }
            OptionKind::Button => Ok(()),
            OptionKind::String => {
                let def = if self.default_string.is_empty() {
                    "<empty>"
                } else {
                    self.default_string
                };
                write!(f, " default {def}")
            }
            OptionKind::Combo => write!(f, " default {}", self.default_string),
        }
    }
}
