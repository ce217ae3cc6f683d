//! Environment variable restricting which devices a backend process sees.

use std::process::Command;

use serde::Serialize;

/// `(name, value)` pair to set before launching a compute backend.
///
/// An empty name means "set nothing". That is the normal answer on platforms
/// where backends always see every device, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityEnv {
    name: String,
    value: String,
}

impl VisibilityEnv {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The `("", "")` pair.
    pub const fn noop() -> Self {
        Self {
            name: String::new(),
            value: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_noop(&self) -> bool {
        self.name.is_empty()
    }

    pub fn into_pair(self) -> (String, String) {
        (self.name, self.value)
    }

    /// Set the variable on a command that has not been spawned yet.
    ///
    /// Does nothing for a no-op pair.
    pub fn apply<'a>(&self, command: &'a mut Command) -> &'a mut Command {
        if self.is_noop() {
            command
        } else {
            command.env(&self.name, &self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_noop_pair_is_empty() {
        let env = VisibilityEnv::noop();
        assert!(env.is_noop());
        assert_eq!(env.into_pair(), (String::new(), String::new()));
    }

    #[test]
    fn test_apply_sets_variable() {
        let env = VisibilityEnv::new("CUDA_VISIBLE_DEVICES", "0,1");
        let mut command = Command::new("llama-server");
        env.apply(&mut command);

        let vars: Vec<_> = command.get_envs().collect();
        assert_eq!(
            vars,
            vec![(OsStr::new("CUDA_VISIBLE_DEVICES"), Some(OsStr::new("0,1")))]
        );
    }

    #[test]
    fn test_apply_noop_leaves_command_untouched() {
        let mut command = Command::new("llama-server");
        VisibilityEnv::noop().apply(&mut command);
        assert_eq!(command.get_envs().count(), 0);
    }
}
