/// Declare a record type together with its [`Schema`](crate::Schema).
///
/// Required fields carry one of the kinds `Name`, `Text` or `Year`; optional fields are always
/// strings. The macro generates the struct, read-only accessors, the `SCHEMA` constant, the
/// validating constructors, and the serde implementations.
macro_rules! bib_entry {
    (@ref Name) => { &str };
    (@ref Text) => { &str };
    (@ref Year) => { i32 };

    (@get Name, $e:expr) => { $e.as_str() };
    (@get Text, $e:expr) => { $e.as_str() };
    (@get Year, $e:expr) => { $e };

    (@rules Name) => { $crate::schema::FieldSpec::AUTHOR_RULES };
    (@rules Text) => { $crate::schema::FieldSpec::TEXT_RULES };
    (@rules Year) => { $crate::schema::FieldSpec::YEAR_RULES };

    (
        $(#[$meta:meta])*
        pub struct $name:ident => $kind:ident {
            required {
                $($req:ident: $ty:ident),+ $(,)?
            }
            optional {
                $($opt:ident),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "Fields")]
        pub struct $name {
            $($req: field_type::$ty,)+
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                $opt: Option<String>,
            )*
        }

        impl $name {
            pub const KIND: EntryKind = EntryKind::$kind;

            pub const SCHEMA: Schema = Schema {
                entry_type: EntryKind::$kind.name(),
                fields: &[
                    $($crate::schema::FieldSpec::required(stringify!($req), bib_entry!(@rules $ty)),)+
                    $($crate::schema::FieldSpec::optional(stringify!($opt)),)*
                ],
            };

            /// Validate `fields` against the local system clock.
            pub fn new(fields: Fields) -> Result<Self, ValidationError> {
                Self::new_with(fields, &Validator::new())
            }

            /// Validate `fields` with the provided validator.
            pub fn new_with<C: Clock>(
                fields: Fields,
                validator: &Validator<C>,
            ) -> Result<Self, ValidationError> {
                let result = validator.check(&Self::SCHEMA, fields).and_then(|mut checked| {
                    Ok(Self {
                        $($req: checked.required(stringify!($req))?,)+
                        $($opt: checked.optional(stringify!($opt))?,)*
                    })
                });

                match &result {
                    Ok(_) => tracing::trace!(entry_type = Self::SCHEMA.entry_type, "entry validated"),
                    Err(err) => tracing::debug!(
                        entry_type = Self::SCHEMA.entry_type,
                        field = ?err.field(),
                        error = %err,
                        "entry rejected"
                    ),
                }

                result
            }

            /// The field values of this entry, suitable for constructing it again.
            pub fn to_fields(&self) -> Fields {
                let mut fields = Fields::new();
                $(fields.insert(stringify!($req), self.$req.clone());)+
                $(
                    if let Some(value) = &self.$opt {
                        fields.insert(stringify!($opt), value.as_str());
                    }
                )*
                fields
            }

            $(
                pub fn $req(&self) -> bib_entry!(@ref $ty) {
                    bib_entry!(@get $ty, self.$req)
                }
            )+

            $(
                pub fn $opt(&self) -> Option<&str> {
                    self.$opt.as_deref()
                }
            )*
        }

        impl TryFrom<Fields> for $name {
            type Error = ValidationError;

            #[inline]
            fn try_from(fields: Fields) -> Result<Self, Self::Error> {
                Self::new(fields)
            }
        }

        impl From<$name> for Fields {
            fn from(entry: $name) -> Self {
                entry.to_fields()
            }
        }
    };
}

pub(crate) use bib_entry;

/// The stored type of each required field kind.
pub(crate) mod field_type {
    pub type Name = String;
    pub type Text = String;
    pub type Year = i32;
}
