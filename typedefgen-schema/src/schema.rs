//! Schema types for typedefs.toml files.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Root schema for typedefs.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Schema {
    /// Output configuration
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Names of the two component tiers
    #[serde(default)]
    pub components: ComponentsConfig,

    /// Named typedefs, keyed by identifier
    #[serde(default)]
    pub typedefs: BTreeMap<String, TypedefDecl>,

    /// Union types used outside typedefs (attributes, arguments, members)
    #[serde(default)]
    pub unions: Vec<UnionDecl>,
}

impl Schema {
    /// Check if a typedef exists
    pub fn has_typedef(&self, name: &str) -> bool {
        self.typedefs.contains_key(name)
    }

    /// Typedef identifiers referenced directly by a type expression
    pub fn typedef_refs<'a>(&'a self, ty: &'a TypeExpr) -> impl Iterator<Item = &'a str> + 'a {
        ty.refs()
            .map(|r| r.name)
            .filter(|name| self.has_typedef(name))
    }
}

/// `[generator]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// C++ namespace the declarations are placed in
    pub namespace: String,

    /// Header file name without extension
    pub basename: String,

    /// Per-component output directory; `{component}` is replaced by the component name
    pub path: String,

    /// Prefix of every union binding class name
    pub class_prefix: String,

    /// Banner lines rendered as `// <line>` at the top of every header
    pub license: Vec<String>,

    /// Extra `#include` directives
    pub includes: Vec<String>,
}

impl GeneratorConfig {
    /// Relative header path for a component, e.g. `bindings/core/v8/v8_typedefs.h`
    pub fn header_path(&self, component: &str) -> String {
        let dir = self.path.replace("{component}", component);
        let dir = dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{}.h", self.basename)
        } else {
            format!("{}/{}.h", dir, self.basename)
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "blink".into(),
            basename: "v8_typedefs".into(),
            path: "bindings/{component}/v8".into(),
            class_prefix: "V8Union".into(),
            license: vec![
                "Copyright The Authors. All rights reserved.".into(),
                "Use of this source code is governed by a BSD-style license that can be".into(),
                "found in the LICENSE file.".into(),
            ],
            includes: Vec::new(),
        }
    }
}

/// `[components]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComponentsConfig {
    /// Lower layer component
    pub base: String,
    /// Higher layer component
    pub extended: String,
}

impl ComponentsConfig {
    /// Check that a component name is one of the two tiers
    pub fn is_known(&self, name: &str) -> bool {
        name == self.base || name == self.extended
    }
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            base: "core".into(),
            extended: "modules".into(),
        }
    }
}

/// A `[typedefs.<Name>]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypedefDecl {
    /// Aliased type
    #[serde(rename = "type")]
    pub ty: TypeExpr,

    /// Whether the aliased type itself is nullable
    #[serde(default)]
    pub nullable: bool,

    /// Components referencing this typedef (defaults to the base component)
    #[serde(default)]
    pub components: Vec<String>,
}

/// A `[[unions]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnionDecl {
    /// Member types, in declaration order
    pub members: Vec<String>,

    /// Whether the union itself is nullable
    #[serde(default)]
    pub nullable: bool,

    /// Components referencing this union (defaults to the base component)
    #[serde(default)]
    pub components: Vec<String>,
}

impl UnionDecl {
    /// View this usage as a type expression
    pub fn as_type(&self) -> TypeExpr {
        TypeExpr::Union(self.members.clone())
    }
}

/// The right-hand side of a typedef: one type, or an array of union members
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeExpr {
    Single(String),
    Union(Vec<String>),
}

impl TypeExpr {
    /// Every type reference in the expression, in declaration order
    pub fn refs(&self) -> impl Iterator<Item = TypeRef<'_>> {
        let names: &[String] = match self {
            TypeExpr::Single(name) => std::slice::from_ref(name),
            TypeExpr::Union(members) => members,
        };
        names.iter().map(|name| TypeRef::parse(name))
    }
}

/// A type name with its optional trailing `?`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeRef<'a> {
    pub name: &'a str,
    pub nullable: bool,
}

impl<'a> TypeRef<'a> {
    /// Split `"String?"` into `String` + nullable
    pub fn parse(s: &'a str) -> Self {
        let s = s.trim();
        match s.strip_suffix('?') {
            Some(name) => Self {
                name: name.trim_end(),
                nullable: true,
            },
            None => Self {
                name: s,
                nullable: false,
            },
        }
    }
}
