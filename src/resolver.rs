//! Picks the concrete pair of tags a changelog spans

use tracing::debug;

use crate::domain::{Tag, TagOrder, TagRange, TagSelector};
use crate::error::{ChangelogError, Result};

/// Resolve `from`/`to` selectors against the repository's tags.
///
/// `Auto` for `from` picks the last tag under `order`; `Auto` for `to`
/// picks the tag right before the resolved `from`. Named selectors are
/// passed through untouched; whether they exist is checked when they are
/// looked up in the repository.
pub fn resolve(
    tags: &[Tag],
    from: &TagSelector,
    to: &TagSelector,
    order: TagOrder,
) -> Result<TagRange> {
    if tags.len() < 2 {
        return Err(ChangelogError::InsufficientTags { found: tags.len() });
    }

    let mut sorted = tags.to_vec();
    order.sort(&mut sorted);

    let from_tag = match from {
        TagSelector::Auto => sorted[sorted.len() - 1].clone(),
        TagSelector::Named(name) => Tag::new(name.as_str()),
    };

    let to_tag = match to {
        TagSelector::Named(name) => Tag::new(name.as_str()),
        TagSelector::Auto => match sorted.iter().position(|t| *t == from_tag) {
            Some(0) => {
                return Err(ChangelogError::NoPrecedingTag {
                    tag: from_tag.name,
                })
            }
            Some(i) => sorted[i - 1].clone(),
            None => {
                return Err(ChangelogError::ToTagUnresolved {
                    from: from_tag.name,
                })
            }
        },
    };

    debug!(from = %from_tag, to = %to_tag, ?order, "resolved tag range");
    Ok(TagRange {
        from: from_tag,
        to: to_tag,
    })
}
