use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    attrs,
    errors::{Error, Result},
    range::RangeDimension,
    sampled::SampledDimension,
    set::SetDimension,
    store::{Store, Value},
};

pub(crate) const DIMENSION_TYPE: &str = "dimension_type";
pub(crate) const INDEX: &str = "index";

/// The three kinds of dimension, as persisted in the `dimension_type` attribute
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DimensionType {
    Sample,
    Range,
    Set,
}

impl DimensionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionType::Sample => "Sample",
            DimensionType::Range => "Range",
            DimensionType::Set => "Set",
        }
    }
}

impl fmt::Display for DimensionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionType {
    type Err = Error;

    /// Tags are case sensitive. Anything other than `Sample`, `Range` or `Set` is an
    /// `Error::InvalidValue`.
    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "Sample" => Ok(DimensionType::Sample),
            "Range" => Ok(DimensionType::Range),
            "Set" => Ok(DimensionType::Set),
            _ => Err(Error::InvalidValue(tag.to_string())),
        }
    }
}

/// Operations shared by every kind of dimension.
///
/// A dimension holds no state of its own. Everything is read from and written to the `Store`
/// node the dimension is attached to.
///
pub trait DimensionBase {
    type Store: Store;

    /// The store node this dimension lives on
    fn store(&self) -> &Self::Store;

    /// The persisted dimension type.
    ///
    /// Fails with `Error::MissingAttribute` if the type was never set.
    ///
    fn dimension_type(&self) -> Result<DimensionType> {
        attrs::get_required(self.store(), DIMENSION_TYPE, attrs::expect_text)?.parse()
    }

    fn set_dimension_type(&self, dimension_type: DimensionType) -> Result<()> {
        debug!(%dimension_type, "set dimension type");
        self.store()
            .set_attr(DIMENSION_TYPE, Value::from(dimension_type.as_str()))
    }

    /// The 1-based position of this dimension among the dimensions of its data array
    fn index(&self) -> Result<usize> {
        attrs::get_required(self.store(), INDEX, attrs::expect_index)
    }

    /// Set the position of this dimension.
    ///
    /// No check is made against the number of sibling dimensions. Keeping indices consistent is
    /// up to the owner of the dimensions.
    ///
    fn set_index(&self, index: usize) -> Result<()> {
        let value = i64::try_from(index)
            .map_err(|_| Error::OutOfBounds(format!("index {index} can't be persisted")))?;
        debug!(index, "set dimension index");
        self.store().set_attr(INDEX, Value::Int(value))
    }
}

/// Attach a new dimension to the child of `parent` named after `index`, then stamp the index and
/// dimension type.
///
pub(crate) fn create_new<D, F>(
    parent: &D::Store,
    index: usize,
    dimension_type: DimensionType,
    wrap: F,
) -> Result<D>
where
    D: DimensionBase,
    F: FnOnce(D::Store) -> D,
{
    let dimension = wrap(parent.open_child(&index.to_string())?);
    dimension.set_index(index)?;
    dimension.set_dimension_type(dimension_type)?;

    Ok(dimension)
}

/// Getter and setter for an optional free form text attribute
macro_rules! text_attribute {
    ($name:ident) => {
        paste::paste! {
            pub fn $name(&self) -> $crate::errors::Result<Option<String>> {
                $crate::attrs::get_optional(
                    &self.store,
                    stringify!($name),
                    $crate::attrs::expect_text,
                )
            }

            pub fn [<set_ $name>]<T: Into<String>>(&self, $name: T) -> $crate::errors::Result<()> {
                let $name = $name.into();
                tracing::debug!(attribute = stringify!($name), value = %$name, "set attribute");
                $crate::store::Store::set_attr(
                    &self.store,
                    stringify!($name),
                    $crate::store::Value::Text($name),
                )
            }
        }
    };
}

pub(crate) use text_attribute;

/// A dimension of any kind.
///
/// Operations common to all kinds are available through `DimensionBase`. Kind specific
/// operations are reached by matching on the variant or through `as_sampled`, `as_range` and
/// `as_set`.
///
pub enum Dimension<S: Store> {
    Sample(SampledDimension<S>),
    Range(RangeDimension<S>),
    Set(SetDimension<S>),
}

impl<S: Store> Dimension<S> {
    /// Open an existing dimension, choosing the variant from its persisted dimension type.
    ///
    pub fn open(store: S) -> Result<Self> {
        let tag = attrs::get_required(&store, DIMENSION_TYPE, attrs::expect_text)?;
        let dimension = match tag.parse::<DimensionType>()? {
            DimensionType::Sample => Dimension::Sample(SampledDimension::new(store)),
            DimensionType::Range => Dimension::Range(RangeDimension::new(store)),
            DimensionType::Set => Dimension::Set(SetDimension::new(store)),
        };

        Ok(dimension)
    }

    /// Open the dimension at `index` under `parent`.
    ///
    pub fn open_at(parent: &S, index: usize) -> Result<Self> {
        Self::open(parent.open_child(&index.to_string())?)
    }

    /// The kind of this dimension, known without a store read.
    pub fn kind(&self) -> DimensionType {
        match self {
            Dimension::Sample(_) => DimensionType::Sample,
            Dimension::Range(_) => DimensionType::Range,
            Dimension::Set(_) => DimensionType::Set,
        }
    }

    pub fn as_sampled(&self) -> Option<&SampledDimension<S>> {
        match self {
            Dimension::Sample(dimension) => Some(dimension),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&RangeDimension<S>> {
        match self {
            Dimension::Range(dimension) => Some(dimension),
            _ => None,
        }
    }

    pub fn as_set(&self) -> Option<&SetDimension<S>> {
        match self {
            Dimension::Set(dimension) => Some(dimension),
            _ => None,
        }
    }
}

impl<S: Store> DimensionBase for Dimension<S> {
    type Store = S;

    fn store(&self) -> &S {
        match self {
            Dimension::Sample(dimension) => dimension.store(),
            Dimension::Range(dimension) => dimension.store(),
            Dimension::Set(dimension) => dimension.store(),
        }
    }
}

impl<S: Store> From<SampledDimension<S>> for Dimension<S> {
    fn from(dimension: SampledDimension<S>) -> Self {
        Dimension::Sample(dimension)
    }
}

impl<S: Store> From<RangeDimension<S>> for Dimension<S> {
    fn from(dimension: RangeDimension<S>) -> Self {
        Dimension::Range(dimension)
    }
}

impl<S: Store> From<SetDimension<S>> for Dimension<S> {
    fn from(dimension: SetDimension<S>) -> Self {
        Dimension::Set(dimension)
    }
}
