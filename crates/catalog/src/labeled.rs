// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lists that may be written as a sequence or as labeled blocks.

use indexmap::IndexMap;
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::marker::PhantomData;
use surf_core::RelatedLink;

/// An entry whose map key doubles as its name.
pub(crate) trait Labeled {
    /// Adopt `label` unless the entry already names itself.
    fn adopt_label(&mut self, label: String);
}

impl Labeled for RelatedLink {
    fn adopt_label(&mut self, label: String) {
        if self.text.is_empty() {
            self.text = label;
        }
    }
}

/// Deserialize entries from either a sequence or a map of labeled blocks.
///
/// - TOML `[[help.X.link]]` and JSON arrays produce a `Vec<T>`
/// - HCL `link "Online" { }` and TOML `[help.X.parameter.P]` produce an
///   `IndexMap<String, T>` (preserves insertion order); each key becomes the
///   entry's label
pub(crate) fn deserialize_labeled<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Labeled,
{
    struct LabeledVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for LabeledVisitor<T>
    where
        T: Deserialize<'de> + Labeled,
    {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a sequence of entries or a map of labeled blocks")
        }

        fn visit_seq<S>(self, seq: S) -> Result<Vec<T>, S::Error>
        where
            S: SeqAccess<'de>,
        {
            Vec::deserialize(de::value::SeqAccessDeserializer::new(seq))
        }

        fn visit_map<M>(self, map: M) -> Result<Vec<T>, M::Error>
        where
            M: MapAccess<'de>,
        {
            let index_map: IndexMap<String, T> =
                IndexMap::deserialize(de::value::MapAccessDeserializer::new(map))?;
            Ok(index_map
                .into_iter()
                .map(|(key, mut entry)| {
                    entry.adopt_label(key);
                    entry
                })
                .collect())
        }
    }

    deserializer.deserialize_any(LabeledVisitor(PhantomData))
}

/// Accept `required = true` as well as `required = "true"`; null is empty.
pub(crate) fn deserialize_flag_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagStringVisitor;

    impl Visitor<'_> for FlagStringVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a boolean or a string")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        // JSON `null` reads as unset
        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(FlagStringVisitor)
}
