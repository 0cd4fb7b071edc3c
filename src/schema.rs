//! # Entry schemas
//! Every entry type is described by a [`Schema`]: an ordered list of [`FieldSpec`]s, each naming
//! a field, whether it is required, and the [`Rule`]s its value must satisfy. A single routine,
//! [`Validator::check`], interprets any schema.
//!
//! | Field kind             | Rules                                   |
//! |------------------------|-----------------------------------------|
//! | author                 | [`Rule::Str`], [`Rule::Name`], [`Rule::MaxLen`] |
//! | other required strings | [`Rule::Str`], [`Rule::MaxLen`]           |
//! | year                   | [`Rule::Integer`], [`Rule::YearRange`]    |
//! | optional strings       | [`Rule::StrOrAbsent`], [`Rule::MaxLen`]   |
use std::collections::BTreeMap;

use chrono::Datelike;

use crate::error::{Expected, ValidationError};
use crate::fields::Fields;
use crate::validate::{
    MAX_FIELD_LEN, check_len, check_name, check_year, coerce_integer, year_bounds,
};
use crate::value::FieldValue;

/// A single validation predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value is a string.
    Str,
    /// The value is absent or a string.
    StrOrAbsent,
    /// The string is an author name.
    Name,
    /// The string does not exceed [`MAX_FIELD_LEN`] chars.
    MaxLen,
    /// The value is coerced to an integer.
    Integer,
    /// The integer is an accepted publication year.
    YearRange,
}

/// The declaration of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub rules: &'static [Rule],
}

impl FieldSpec {
    pub const AUTHOR_RULES: &'static [Rule] = &[Rule::Str, Rule::Name, Rule::MaxLen];
    pub const TEXT_RULES: &'static [Rule] = &[Rule::Str, Rule::MaxLen];
    pub const YEAR_RULES: &'static [Rule] = &[Rule::Integer, Rule::YearRange];
    pub const OPTIONAL_RULES: &'static [Rule] = &[Rule::StrOrAbsent, Rule::MaxLen];

    pub const fn required(name: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            name,
            required: true,
            rules,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            rules: Self::OPTIONAL_RULES,
        }
    }
}

/// The declaration of an entry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    /// The lowercase BibTeX entry type, such as `book`.
    pub entry_type: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields
            .iter()
            .find(|spec| spec.name.eq_ignore_ascii_case(name))
    }

    pub fn required(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|spec| spec.required)
    }

    pub fn optional(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|spec| !spec.required)
    }
}

/// The source of the current calendar year.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// The local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// A clock which is frozen in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    #[inline]
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Interprets a [`Schema`] against a [`Fields`] map.
///
/// The clock is read once per check, so the upper year bound follows the calendar.
#[derive(Debug, Clone, Default)]
pub struct Validator<C = SystemClock> {
    clock: C,
}

impl Validator {
    /// A validator reading the local system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Validator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The latest accepted publication year, right now.
    pub fn max_year(&self) -> i32 {
        year_bounds(self.clock.current_year()).1
    }

    /// Validate `fields` against `schema`.
    ///
    /// Unknown fields are rejected first, then missing required fields; then every field is
    /// checked in schema order. The first violation aborts.
    pub fn check(
        &self,
        schema: &Schema,
        mut fields: Fields,
    ) -> Result<CheckedFields, ValidationError> {
        if let Some(unknown) = fields.keys().find(|key| schema.field(key).is_none()) {
            return Err(ValidationError::UnknownField {
                entry_type: schema.entry_type,
                field: unknown.to_owned(),
            });
        }

        if let Some(missing) = schema.required().find(|spec| !fields.contains_key(spec.name)) {
            return Err(ValidationError::MissingRequiredField(missing.name));
        }

        let current_year = self.clock.current_year();
        let mut checked = BTreeMap::new();

        for spec in schema.fields {
            let value = fields.remove(spec.name).unwrap_or_default();
            if !spec.required && value.is_null() {
                continue;
            }
            let value = check_field(spec, value, current_year)?;
            checked.insert(spec.name, value);
        }

        Ok(CheckedFields(checked))
    }
}

fn invalid_type(spec: &FieldSpec, expected: Expected, value: &FieldValue) -> ValidationError {
    ValidationError::InvalidType {
        field: spec.name,
        expected,
        found: value.kind(),
    }
}

/// Apply the rules of a single field in order, coercing the value as the rules require.
fn check_field(
    spec: &FieldSpec,
    mut value: FieldValue,
    current_year: i32,
) -> Result<FieldValue, ValidationError> {
    for rule in spec.rules {
        match rule {
            Rule::Str | Rule::StrOrAbsent => {
                if value.as_str().is_none() {
                    return Err(invalid_type(spec, Expected::String, &value));
                }
            }
            Rule::Name => {
                let name = value
                    .as_str()
                    .ok_or_else(|| invalid_type(spec, Expected::String, &value))?;
                check_name(name).map_err(|reason| ValidationError::InvalidName {
                    field: spec.name,
                    reason,
                })?;
            }
            Rule::MaxLen => {
                let s = value
                    .as_str()
                    .ok_or_else(|| invalid_type(spec, Expected::String, &value))?;
                check_len(s).map_err(|len| ValidationError::FieldTooLong {
                    field: spec.name,
                    len,
                    max: MAX_FIELD_LEN,
                })?;
            }
            Rule::Integer => {
                let int = coerce_integer(&value)
                    .ok_or_else(|| invalid_type(spec, Expected::Integer, &value))?;
                value = FieldValue::Int(int);
            }
            Rule::YearRange => {
                let FieldValue::Int(year) = value else {
                    return Err(invalid_type(spec, Expected::Integer, &value));
                };
                check_year(year, current_year).map_err(|(min, max)| {
                    ValidationError::InvalidYear {
                        field: spec.name,
                        year,
                        min,
                        max,
                    }
                })?;
            }
        }
    }
    Ok(value)
}

/// Conversion from a checked value into the type stored in a record.
pub trait FromChecked: Sized {
    const EXPECTED: Expected;

    fn from_checked(value: FieldValue) -> Option<Self>;
}

impl FromChecked for String {
    const EXPECTED: Expected = Expected::String;

    fn from_checked(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl FromChecked for i32 {
    const EXPECTED: Expected = Expected::Integer;

    fn from_checked(value: FieldValue) -> Option<Self> {
        match value {
            FieldValue::Int(i) => i32::try_from(i).ok(),
            _ => None,
        }
    }
}

/// The values of a [`Fields`] map which passed [`Validator::check`], keyed by schema field name.
#[derive(Debug, Default)]
pub struct CheckedFields(BTreeMap<&'static str, FieldValue>);

impl CheckedFields {
    /// Take a required field.
    pub fn required<T: FromChecked>(&mut self, name: &'static str) -> Result<T, ValidationError> {
        let value = self
            .0
            .remove(name)
            .ok_or(ValidationError::MissingRequiredField(name))?;
        let found = value.kind();
        T::from_checked(value).ok_or(ValidationError::InvalidType {
            field: name,
            expected: T::EXPECTED,
            found,
        })
    }

    /// Take an optional field.
    pub fn optional<T: FromChecked>(
        &mut self,
        name: &'static str,
    ) -> Result<Option<T>, ValidationError> {
        match self.0.remove(name) {
            Some(value) => {
                let found = value.kind();
                T::from_checked(value)
                    .map(Some)
                    .ok_or(ValidationError::InvalidType {
                        field: name,
                        expected: T::EXPECTED,
                        found,
                    })
            }
            None => Ok(None),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
