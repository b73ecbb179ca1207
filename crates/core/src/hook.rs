//! Hooks a host build runs before it starts.

use std::time::Instant;

use log::info;

use crate::error::Result;

/// Work that must complete before the host build proceeds.
pub trait BuildHook {
    fn name(&self) -> &str;

    fn before_run(&self) -> Result<()>;
}

impl<H: BuildHook + ?Sized> BuildHook for &H {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn before_run(&self) -> Result<()> {
        (**self).before_run()
    }
}

/// Runs registered hooks in order, stopping at the first failure.
#[derive(Default)]
pub struct HookRunner<'a> {
    hooks: Vec<Box<dyn BuildHook + 'a>>,
}

impl<'a> HookRunner<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: impl BuildHook + 'a) -> &mut Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn run(&self) -> Result<()> {
        let total = self.hooks.len();
        for (i, hook) in self.hooks.iter().enumerate() {
            let name = hook.name();
            info!("[{}/{total}] {name}", i + 1);
            let start = Instant::now();
            hook.before_run()?;
            info!("  ✓ {name} ({:.2}s)", start.elapsed().as_secs_f64());
        }
        Ok(())
    }
}
