//! Decoder: YAML document → group, in two phases.
//!
//! 1. **Tag-sniff**: the document is parsed once into a generic
//!    [`serde_yaml::Value`] tree and only the `type` key is read.
//! 2. **Shape-parse**: the same tree is projected onto the shape the
//!    registry holds for that tag, checking every field's primitive kind.
//!
//! Each phase produces its own type ([`SniffedDocument`], [`ValidatedShape`]),
//! so construction cannot run on an unvalidated tree.
//!
//! Text-typed fields (`id`, `item.name`, ItemA's `item.value`) keep the
//! scalar as the document spells it: `id: 007` decodes to `"007"`, not `"7"`.
//! The resolved tree only decides the kind; the spelling comes from
//! [`Literals`], read from the same text.
//!
//! ```text
//! Start -> TagSniffed -> ShapeValidated -> Constructed
//!   \          \               \
//!    `----------`---------------`-> Failed(kind)
//! ```

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use strum::Display;

use crate::config::CodecConfig;
use crate::model::{Group, Item, ItemA, ItemB, ItemKind, Tag};
use crate::registry::{self, Shape};
use crate::{Error, ErrorKind, Result};

const TOP_LEVEL_KEYS: [&str; 3] = ["id", "item", "type"];
const ITEM_KEYS: [&str; 2] = ["name", "value"];

/// Where a decode is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum DecodeState {
    Start,
    TagSniffed,
    ShapeValidated,
    Constructed,
    Failed(ErrorKind),
}

/// Result of a decode together with the last phase it completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Last successful state (`Constructed` on success).
    pub reached: DecodeState,
    pub result: Result<Group>,
}

impl DecodeOutcome {
    /// Terminal state: `Constructed` or `Failed(kind)`.
    #[must_use]
    pub fn terminal(&self) -> DecodeState {
        match &self.result {
            Ok(_) => DecodeState::Constructed,
            Err(err) => DecodeState::Failed(err.kind()),
        }
    }

    fn failed_at_start(err: Error) -> Self {
        Self {
            reached: DecodeState::Start,
            result: Err(err),
        }
    }
}

/// Scalars of the declared fields exactly as written in the document.
///
/// Reading a plain scalar as a string skips YAML's type resolution, so
/// `1e3`, `0x1F` and `1.50` survive unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Literals {
    id: Option<String>,
    #[serde(default)]
    item: ItemLiterals,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
struct ItemLiterals {
    name: Option<String>,
    value: Option<String>,
}

impl Literals {
    /// Read the declared scalars of a YAML document.
    ///
    /// Returns `None` when a declared field is not a scalar; the shape phase
    /// rejects such documents on the resolved tree.
    #[must_use]
    pub fn read(text: &str) -> Option<Self> {
        serde_yaml::from_str(text).ok()
    }
}

/// Output of the tag-sniff phase.
#[derive(Debug)]
pub struct SniffedDocument<'a> {
    shape: &'static Shape,
    root: &'a Mapping,
    literals: Option<&'a Literals>,
}

impl<'a> SniffedDocument<'a> {
    #[must_use]
    pub const fn tag(&self) -> Tag {
        self.shape.tag
    }

    /// Attach the document's literal scalars for the shape phase.
    #[must_use]
    pub fn with_literals(mut self, literals: &'a Literals) -> Self {
        self.literals = Some(literals);
        self
    }
}

/// Output of the shape-parse phase: every field typed, nothing built yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedShape {
    shape: &'static Shape,
    id: Option<String>,
    item: Item,
}

/// Decode a document held in memory.
///
/// # Errors
///
/// Returns [`Error::DocumentTooLarge`] or [`Error::Syntax`] before phase 1,
/// then any error of [`sniff`] or [`validate`].
pub fn decode_str(text: &str, config: &CodecConfig) -> Result<Group> {
    run_text(text, config).result
}

/// Decode an already parsed document tree.
///
/// Without the source text, numeric scalars in text fields are rendered
/// from their resolved value.
pub fn decode_value(root: &Value, config: &CodecConfig) -> Result<Group> {
    run(root, config).result
}

/// Decode document text, reporting how far the state machine got.
pub fn run_text(text: &str, config: &CodecConfig) -> DecodeOutcome {
    if text.len() > config.max_document_bytes {
        return DecodeOutcome::failed_at_start(Error::DocumentTooLarge {
            size: text.len(),
            limit: config.max_document_bytes,
        });
    }
    let root = match serde_yaml::from_str::<Value>(text) {
        Ok(root) => root,
        Err(err) => return DecodeOutcome::failed_at_start(err.into()),
    };
    let literals = Literals::read(text);
    run_with(&root, literals.as_ref(), config)
}

/// Decode a document tree, reporting how far the state machine got.
pub fn run(root: &Value, config: &CodecConfig) -> DecodeOutcome {
    run_with(root, None, config)
}

fn run_with(root: &Value, literals: Option<&Literals>, config: &CodecConfig) -> DecodeOutcome {
    let mut reached = DecodeState::Start;
    let result = run_phases(root, literals, config, &mut reached);
    match &result {
        Ok(group) => tracing::debug!(tag = %group.tag(), "decoded group"),
        Err(err) => {
            tracing::debug!(after = %reached, kind = %err.kind(), "decode failed: {err}");
        }
    }
    DecodeOutcome { reached, result }
}

fn run_phases(
    root: &Value,
    literals: Option<&Literals>,
    config: &CodecConfig,
    reached: &mut DecodeState,
) -> Result<Group> {
    let sniffed = sniff(root)?;
    let sniffed = match literals {
        Some(literals) => sniffed.with_literals(literals),
        None => sniffed,
    };
    *reached = DecodeState::TagSniffed;
    tracing::trace!(tag = %sniffed.tag(), "tag sniffed");

    let validated = validate(&sniffed, config.strict_keys)?;
    *reached = DecodeState::ShapeValidated;
    tracing::trace!("shape validated");

    let group = construct(validated)?;
    *reached = DecodeState::Constructed;
    Ok(group)
}

/// Phase 1: read the `type` key and resolve it through the registry.
///
/// # Errors
///
/// - [`Error::MalformedDocument`] if the root is not a mapping
/// - [`Error::MissingTag`] if there is no `type` key
/// - [`Error::MalformedTag`] if `type` is not a string
/// - [`Error::UnknownTag`] if `type` names no registered tag
pub fn sniff(root: &Value) -> Result<SniffedDocument<'_>> {
    let Value::Mapping(mapping) = root else {
        return Err(Error::MalformedDocument {
            detail: format!("expected a mapping at the root, found {}", kind_name(root)),
        });
    };

    let shape = match mapping.get("type") {
        None => Err(Error::MissingTag),
        Some(Value::String(name)) => registry::resolve_name(name),
        Some(other) => Err(Error::MalformedTag {
            found: kind_name(other).to_string(),
        }),
    }?;

    Ok(SniffedDocument {
        shape,
        root: mapping,
        literals: None,
    })
}

/// Phase 2: project the sniffed tree onto the tag's shape.
///
/// # Errors
///
/// - [`Error::ShapeMismatch`] naming the first field of the wrong kind
/// - [`Error::UnexpectedKey`] for undeclared keys when `strict_keys` is set
pub fn validate(sniffed: &SniffedDocument<'_>, strict_keys: bool) -> Result<ValidatedShape> {
    let shape = sniffed.shape;
    let tag = shape.tag.name();
    let root = sniffed.root;
    let literals = sniffed.literals;

    check_keys(root, &TOP_LEVEL_KEYS, "", strict_keys)?;

    let id = match root.get("id") {
        None | Some(Value::Null) => None,
        Some(value) => Some(
            text(value, literals.and_then(|l| l.id.as_deref()))
                .ok_or_else(|| Error::shape_mismatch(tag, "id", "scalar", kind_name(value)))?,
        ),
    };

    let item = match root.get("item") {
        Some(Value::Mapping(item)) => Ok(item),
        Some(other) => Err(Error::shape_mismatch(tag, "item", "mapping", kind_name(other))),
        None => Err(Error::shape_mismatch(tag, "item", "mapping", "missing")),
    }?;
    check_keys(item, &ITEM_KEYS, "item.", strict_keys)?;
    let item_literals = literals.map(|l| &l.item);

    let name = match item.get("name") {
        Some(value) => text(value, item_literals.and_then(|l| l.name.as_deref()))
            .ok_or_else(|| Error::shape_mismatch(tag, "item.name", "text", kind_name(value))),
        None => Err(Error::shape_mismatch(tag, "item.name", "text", "missing")),
    }?;

    let expected = shape.value_kind().to_string();
    let value = item
        .get("value")
        .ok_or_else(|| Error::shape_mismatch(tag, "item.value", &expected, "missing"))?;
    let literal = item_literals.and_then(|l| l.value.as_deref());
    let item = match shape.item {
        ItemKind::ItemA => text(value, literal)
            .map(|value| Item::A(ItemA { name, value }))
            .ok_or_else(|| Error::shape_mismatch(tag, "item.value", &expected, kind_name(value))),
        ItemKind::ItemB => integer(value, literal)
            .map(|value| Item::B(ItemB { name, value }))
            .map_err(|found| Error::shape_mismatch(tag, "item.value", &expected, found)),
    }?;

    Ok(ValidatedShape { shape, id, item })
}

/// Phase 3: build the group variant the shape selects, tagged with exactly
/// the resolved tag.
///
/// # Errors
///
/// Returns [`Error::Consistency`] if the validated item is not the variant
/// registered for the tag.
pub fn construct(validated: ValidatedShape) -> Result<Group> {
    let ValidatedShape { shape, id, item } = validated;
    Group::from_parts(shape.tag, id, item)
}

fn check_keys(mapping: &Mapping, allowed: &[&str], prefix: &str, strict: bool) -> Result<()> {
    for (key, _) in mapping {
        let declared = key.as_str().is_some_and(|k| allowed.contains(&k));
        if declared {
            continue;
        }
        let path = format!(
            "{prefix}{}",
            key.as_str().map_or_else(|| kind_name(key).to_string(), str::to_string)
        );
        if strict {
            return Err(Error::UnexpectedKey { path });
        }
        tracing::debug!(%path, "ignoring undeclared key");
    }
    Ok(())
}

/// Text of a scalar field: the literal spelling when known, else the
/// resolved value as written by its `Display`.
fn text(value: &Value, literal: Option<&str>) -> Option<String> {
    let resolved = match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }?;
    Some(literal.map_or(resolved, str::to_string))
}

fn integer(value: &Value, literal: Option<&str>) -> std::result::Result<i64, &'static str> {
    match value {
        Value::Number(number) => number.as_i64().ok_or(
            // Below i64::MIN the resolver falls back to a float.
            if number.is_u64() || literal.is_some_and(is_integer_literal) {
                "integer out of range"
            } else {
                "float"
            },
        ),
        other => Err(kind_name(other)),
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(&['-', '+'][..]).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
