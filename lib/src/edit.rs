use crate::config::TagOptions;
use crate::error::Result;
use crate::read::read_from_path;
use crate::tag::TagField;
use crate::write::write_to_path;

use std::path::Path;

/// Set the field called `field_name` of the tag in `path` to `value`
///
/// The name is checked before the file is touched, an unknown name fails with
/// [`TagError::UnknownField`](crate::error::TagError::UnknownField).
pub fn edit_path<P: AsRef<Path>>(
    path: P,
    field_name: &str,
    value: &str,
    options: &TagOptions,
) -> Result<()> {
    let field = field_name.parse::<TagField>()?;
    edit_field(path, field, value, options)
}

/// Read the tag of `path`, replace `field` with `value` and write it back
///
/// There is no locking, a concurrent change to the same file between the
/// read and the write is lost.
pub fn edit_field<P, V>(path: P, field: TagField, value: V, options: &TagOptions) -> Result<()>
where
    P: AsRef<Path>,
    V: Into<Vec<u8>>,
{
    let path = path.as_ref();
    let mut tag = read_from_path(path, options)?;

    tag.set(field, value);
    info!("setting {field} of {}", path.display());

    write_to_path(path, &tag, options)
}
