//! Substitution rules applied to extracted bodies
//!
//! Each extracted body is rewritten by an ordered pipeline of literal
//! textual rules before it is embedded in an output file. Order is a fixed
//! policy, identical for every output unit:
//!
//! 1. unit-specific call renames (`self._check_port` -> `check_port`, ...)
//! 2. the generic member-access prefix (`self.` -> `config.`)
//! 3. the fixed reindent (one 8-space unit -> 4 spaces)
//!
//! Specific renames run strictly before the generic prefix rule, otherwise
//! `self._check_port` would first become `config._check_port` and the
//! rename would never fire.

/// A single literal replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub from: &'static str,
    pub to: &'static str,
}

impl Rule {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Rule { from, to }
    }

    /// Apply this rule everywhere in the text.
    pub fn apply(&self, text: &str) -> String {
        text.replace(self.from, self.to)
    }
}

/// `self._show_build_logs(...)` becomes a call to the preamble free function.
pub const RENAME_SHOW_BUILD_LOGS: Rule = Rule::new("self._show_build_logs", "show_build_logs");

/// `self._find_device_port(...)` becomes a call to the preamble free function.
pub const RENAME_FIND_DEVICE_PORT: Rule = Rule::new("self._find_device_port", "find_device_port");

/// `self._check_port(...)` becomes a call to the preamble free function.
pub const RENAME_CHECK_PORT: Rule = Rule::new("self._check_port", "check_port");

/// The configure-cli step retries itself; the retry must call the generated
/// free function, not a method on the config object.
pub const RENAME_CONFIGURE_CLI_RETRY: Rule =
    Rule::new("self.configure_cli()", "configure_cli()");

/// Remaining member accesses move onto the shared configuration object.
pub const SELF_TO_CONFIG: Rule = Rule::new("self.", "config.");

/// Method bodies sit two levels deep in the source class; generated free
/// functions sit one level deep. Purely textual, applied to every 8-space
/// run regardless of context.
pub const REINDENT: Rule = Rule::new("        ", "    ");

/// An ordered rule list applied front to back.
#[derive(Debug, Clone, Default)]
pub struct RulePipeline {
    rules: Vec<Rule>,
}

impl RulePipeline {
    /// Pipeline with no rules; the body passes through unchanged. Used for
    /// the configuration module, whose initializer body stays at class
    /// depth with its `self.` accesses intact.
    pub fn identity() -> Self {
        RulePipeline { rules: Vec::new() }
    }

    /// Standard pipeline for a step script: the unit's specific renames,
    /// then the generic prefix substitution, then the reindent.
    pub fn for_step(renames: &[Rule]) -> Self {
        let mut rules = Vec::with_capacity(renames.len() + 2);
        rules.extend_from_slice(renames);
        rules.push(SELF_TO_CONFIG);
        rules.push(REINDENT);
        RulePipeline { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply every rule in order, producing a new string. The input is
    /// never mutated; rules have no other side effects.
    pub fn apply(&self, body: &str) -> String {
        let mut out = body.to_string();
        for rule in &self.rules {
            out = rule.apply(&out);
        }
        out
    }
}
