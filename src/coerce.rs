//! String-to-typed-value conversion.
//!
//! One conversion rule per slot kind. Boolean and numeric kinds go through
//! `serde_json`'s scalar grammar — the same grammar used for structured-data
//! literals — which rejects trailing garbage, non-numeric text, and
//! out-of-range values. Durations use the `humantime` grammar, which accepts
//! compound mixed-unit literals.

use serde::de::DeserializeOwned;

use crate::error::{BindError, Result};
use crate::schema::Slot;

/// Convert `raw` to the slot's kind and write it through the slot in place.
pub(crate) fn assign(slot: &mut Slot<'_>, raw: &str) -> Result<()> {
    let ty = slot.type_name();
    match slot {
        // Text is taken verbatim, no quoting required
        Slot::Text(dest) => **dest = raw.to_owned(),
        Slot::Duration(dest) => {
            **dest = humantime::parse_duration(raw).map_err(|_| conversion(raw, ty))?;
        }
        Slot::Switch(dest) => **dest = scalar(raw, ty)?,
        Slot::I8(dest) => **dest = scalar(raw, ty)?,
        Slot::I16(dest) => **dest = scalar(raw, ty)?,
        Slot::I32(dest) => **dest = scalar(raw, ty)?,
        Slot::I64(dest) => **dest = scalar(raw, ty)?,
        Slot::Isize(dest) => **dest = scalar(raw, ty)?,
        Slot::U8(dest) => **dest = scalar(raw, ty)?,
        Slot::U16(dest) => **dest = scalar(raw, ty)?,
        Slot::U32(dest) => **dest = scalar(raw, ty)?,
        Slot::U64(dest) => **dest = scalar(raw, ty)?,
        Slot::Usize(dest) => **dest = scalar(raw, ty)?,
        Slot::F32(dest) => **dest = scalar(raw, ty)?,
        Slot::F64(dest) => **dest = scalar(raw, ty)?,
    }
    Ok(())
}

fn scalar<T: DeserializeOwned>(raw: &str, ty: &'static str) -> Result<T> {
    serde_json::from_str(raw).map_err(|_| conversion(raw, ty))
}

fn conversion(value: &str, ty: &str) -> BindError {
    BindError::Conversion {
        value: value.to_string(),
        ty: ty.to_string(),
    }
}
