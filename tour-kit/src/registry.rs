//! Demo registry for looking up, ordering and running demos

use crate::error::{DemoError, RegistrationError};
use crate::instance::{DemoFn, DemoRun};
use std::collections::HashMap;

/// Metadata about a registered demo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoInfo {
    /// Unique demo name
    pub name: &'static str,
    /// Position in the default run order (lower runs first)
    pub order: u16,
    /// Tags for filtering
    pub tags: &'static [&'static str],
}

struct DemoEntry {
    info: DemoInfo,
    demo: DemoFn,
}

/// Builder for constructing a DemoRegistry with fluent API
///
/// The registry is immutable after construction. Duplicate names are
/// rejected during registration.
///
/// # Example
///
/// ```
/// use tour_kit::{DemoError, RegistryBuilder, Transcript};
///
/// fn hello(transcript: &mut Transcript) -> Result<(), DemoError> {
///     transcript.line("hello");
///     Ok(())
/// }
///
/// let registry = RegistryBuilder::new()
///     .register("hello", 1, &[], hello)
///     .unwrap()
///     .build();
///
/// let run = registry.run("hello").unwrap();
/// assert_eq!(run.transcript.lines(), ["hello"]);
/// ```
pub struct RegistryBuilder {
    demos: HashMap<&'static str, DemoEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            demos: HashMap::new(),
        }
    }

    /// Register a demo function under `name`
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the demo registered, ready for chaining
    /// * `Err(RegistrationError)` - A demo with this name already exists
    pub fn register(
        mut self,
        name: &'static str,
        order: u16,
        tags: &'static [&'static str],
        demo: DemoFn,
    ) -> Result<Self, RegistrationError> {
        if self.demos.contains_key(name) {
            return Err(RegistrationError::DuplicateDemo(name));
        }
        tracing::debug!(name, order, "registering demo");
        self.demos.insert(
            name,
            DemoEntry {
                info: DemoInfo { name, order, tags },
                demo,
            },
        );
        Ok(self)
    }

    /// Register all collected demo plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_demo_plugins(|_| true)
    }

    /// Register demo plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use tour_kit::RegistryBuilder;
    /// // Register only demos tagged as "closures"
    /// let registry = RegistryBuilder::new()
    ///     .register_demo_plugins(|plugin| plugin.tags.contains(&"closures"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_demo_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&DemoPlugin) -> bool,
    {
        for plugin in inventory::iter::<DemoPlugin>() {
            if filter(plugin) {
                self = plugin.demo.register_with(self, plugin.name, plugin.order, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    ///
    /// Demos are kept sorted by `order`, ties broken by name.
    pub fn build(self) -> DemoRegistry {
        let mut demos: Vec<DemoEntry> = self.demos.into_values().collect();
        demos.sort_by_key(|entry| (entry.info.order, entry.info.name));
        DemoRegistry { demos }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable, ordered registry of demos
pub struct DemoRegistry {
    demos: Vec<DemoEntry>,
}

impl DemoRegistry {
    /// Metadata of every registered demo, in run order
    pub fn demos(&self) -> impl Iterator<Item = DemoInfo> + '_ {
        self.demos.iter().map(|entry| entry.info)
    }

    /// Look up a demo by name
    pub fn info(&self, name: &str) -> Option<DemoInfo> {
        self.find(name).map(|entry| entry.info)
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// Run a single demo by name
    ///
    /// # Returns
    /// * `Ok(DemoRun)` - The demo ran; its own outcome is in `DemoRun::result`
    /// * `Err(DemoError::NotFound)` - No demo with this name
    pub fn run(&self, name: &str) -> Result<DemoRun, DemoError> {
        let entry = self
            .find(name)
            .ok_or_else(|| DemoError::NotFound(name.to_string()))?;

        tracing::debug!(name = entry.info.name, "running demo");
        Ok(DemoRun::execute(entry.info.name, entry.demo))
    }

    fn find(&self, name: &str) -> Option<&DemoEntry> {
        self.demos.iter().find(|entry| entry.info.name == name)
    }
}

/// Trait for demos that can register themselves with a registry builder
///
/// Type-erased so different demo types can sit in one plugin collection.
/// Any type implementing [`Demo`](crate::Demo) gets this through a blanket impl.
pub trait RegisterableDemo: Sync {
    /// Register this demo type with the builder
    fn register_with(
        &self,
        builder: RegistryBuilder,
        name: &'static str,
        order: u16,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<D> RegisterableDemo for D
where
    D: crate::demo::Demo + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        name: &'static str,
        order: u16,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register(name, order, tags, D::run)
    }
}

/// Plugin information for automatic demo registration
///
/// Usually submitted by `#[derive(AutoRegisterDemo)]`, but can be written by
/// hand:
///
/// ```no_run
/// use tour_kit::{Demo, DemoError, DemoPlugin, Transcript};
///
/// struct Hello;
///
/// impl Demo for Hello {
///     fn run(transcript: &mut Transcript) -> Result<(), DemoError> {
///         transcript.line("hello");
///         Ok(())
///     }
/// }
///
/// tour_kit::inventory::submit! {
///     DemoPlugin {
///         name: "hello",
///         order: 10,
///         demo: &Hello,
///         tags: &["greeting"],
///     }
/// }
/// ```
pub struct DemoPlugin {
    /// Unique demo name
    pub name: &'static str,
    /// Position in the default run order
    pub order: u16,
    /// The demo (type-erased)
    pub demo: &'static dyn RegisterableDemo,
    /// Tags for filtering
    pub tags: &'static [&'static str],
}

inventory::collect!(DemoPlugin);
