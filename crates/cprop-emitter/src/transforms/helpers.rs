//! Runtime helper references.
//!
//! Lowered object literals call two small runtime helpers. The transform only
//! ever asks for a *reference* to a helper; where the helper's definition ends
//! up is the host's business. `FileHelpers` is the file-level implementation:
//! it hands out stable identifier references and remembers which helpers were
//! requested so the printer can emit each definition once, ahead of the
//! program.
//!
//! Helper identifiers share the program's namespace. `FileHelpers::bind_unique`
//! reserves them in the name source before any temporary is allocated, and
//! renames a helper (`_defineProperty2`) when the program already uses its
//! default name.

use crate::transforms::ir::IRNode;
use crate::transforms::scope::{NameSource, UidGenerator};
use rustc_hash::FxHashMap;

/// Runtime helpers the computed-property lowering can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HelperName {
    /// `_defineProperty(target, key, value)`: installs an enumerable, writable,
    /// configurable own data property and returns `target`.
    DefineProperty,
    /// `_defineEnumerableProperties(target, mutatorMap)`: installs, for every
    /// key of the map, an enumerable, configurable accessor property built from
    /// whatever `get`/`set` fields are present. Returns `target`.
    DefineEnumerableProperties,
}

impl HelperName {
    /// All helpers, in emission order.
    pub const ALL: [HelperName; 2] = [
        HelperName::DefineProperty,
        HelperName::DefineEnumerableProperties,
    ];

    /// Default identifier the helper is bound to in generated code.
    pub const fn identifier(self) -> &'static str {
        match self {
            HelperName::DefineProperty => "_defineProperty",
            HelperName::DefineEnumerableProperties => "_defineEnumerableProperties",
        }
    }

    /// ES5 definition of the helper, declared as `binding`.
    pub fn definition(self, binding: &str) -> String {
        let rest = match self {
            HelperName::DefineProperty => DEFINE_PROPERTY_HELPER,
            HelperName::DefineEnumerableProperties => DEFINE_ENUMERABLE_PROPERTIES_HELPER,
        };
        format!("function {binding}{rest}")
    }
}

// Helper bodies, from the parameter list on.
const DEFINE_PROPERTY_HELPER: &str = r#"(obj, key, value) {
    if (key in obj) {
        Object.defineProperty(obj, key, { value: value, enumerable: true, configurable: true, writable: true });
    } else {
        obj[key] = value;
    }
    return obj;
}"#;

const DEFINE_ENUMERABLE_PROPERTIES_HELPER: &str = r#"(obj, descs) {
    for (var key in descs) {
        var desc = descs[key];
        desc.configurable = desc.enumerable = true;
        if ("value" in desc) desc.writable = true;
        Object.defineProperty(obj, key, desc);
    }
    if (Object.getOwnPropertySymbols) {
        var objectSymbols = Object.getOwnPropertySymbols(descs);
        for (var i = 0; i < objectSymbols.length; i++) {
            var sym = objectSymbols[i];
            var desc = descs[sym];
            desc.configurable = desc.enumerable = true;
            if ("value" in desc) desc.writable = true;
            Object.defineProperty(obj, sym, desc);
        }
    }
    return obj;
}"#;

/// Supplies references to runtime helpers.
///
/// Repeated requests for the same helper must return structurally equal
/// references: the define-property chain builder recognizes its own earlier
/// output by comparing callees.
pub trait HelperSource {
    fn helper(&mut self, name: HelperName) -> IRNode;
}

/// Which helpers a file needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpersNeeded {
    pub define_property: bool,
    pub define_enumerable_properties: bool,
}

impl HelpersNeeded {
    pub const fn mark(&mut self, name: HelperName) {
        match name {
            HelperName::DefineProperty => self.define_property = true,
            HelperName::DefineEnumerableProperties => self.define_enumerable_properties = true,
        }
    }

    pub const fn contains(&self, name: HelperName) -> bool {
        match name {
            HelperName::DefineProperty => self.define_property,
            HelperName::DefineEnumerableProperties => self.define_enumerable_properties,
        }
    }

    pub const fn is_empty(&self) -> bool {
        !self.define_property && !self.define_enumerable_properties
    }

    /// Requested helpers in emission order.
    pub fn iter(&self) -> impl Iterator<Item = HelperName> + '_ {
        HelperName::ALL
            .into_iter()
            .filter(move |name| self.contains(*name))
    }
}

/// File-level helper source: each helper is bound to one top-level identifier.
#[derive(Debug, Default)]
pub struct FileHelpers {
    needed: HelpersNeeded,
    /// Helpers bound to something other than their default identifier
    renamed: FxHashMap<HelperName, String>,
}

impl FileHelpers {
    /// Helpers bound to their default identifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every helper to an identifier that is free in `names`, and reserve
    /// it so no later temporary can take it.
    pub fn bind_unique(names: &mut UidGenerator) -> Self {
        let mut helpers = Self::new();
        for name in HelperName::ALL {
            let default = name.identifier();
            if names.is_reserved(default) {
                let binding = names.fresh(default);
                tracing::debug!(helper = default, binding = %binding, "helper name taken, renaming");
                helpers.renamed.insert(name, binding);
            } else {
                names.reserve(default);
            }
        }
        helpers
    }

    pub const fn needed(&self) -> &HelpersNeeded {
        &self.needed
    }

    /// Identifier `name` is bound to in this file.
    pub fn binding(&self, name: HelperName) -> &str {
        self.renamed
            .get(&name)
            .map_or(name.identifier(), String::as_str)
    }

    /// Helper definitions for every requested helper, as raw IR statements.
    pub fn definitions(&self) -> Vec<IRNode> {
        self.needed
            .iter()
            .map(|name| IRNode::Raw(name.definition(self.binding(name))))
            .collect()
    }
}

impl HelperSource for FileHelpers {
    fn helper(&mut self, name: HelperName) -> IRNode {
        if !self.needed.contains(name) {
            tracing::trace!(helper = self.binding(name), "helper requested");
        }
        self.needed.mark(name);
        IRNode::id(self.binding(name))
    }
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod tests;
