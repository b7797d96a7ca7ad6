//! Comparison of `x-` vendor extensions.

use crate::change::{Change, ChangeType, Changes, PropertyChanges, non_empty};
use openapi_low::Extensions;

/// Changes to the vendor extensions of one object. None of them is breaking.
#[derive(Debug, Clone, Default)]
pub struct ExtensionChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
}

impl<'a> Changes<'a> for ExtensionChanges<'a> {
    fn total_changes(&self) -> usize {
        self.property_changes.total_changes()
    }

    fn total_breaking_changes(&self) -> usize {
        0
    }

    fn all_changes(&self) -> Vec<&Change<'a>> {
        self.property_changes.all_changes()
    }
}

/// Compare two extension maps. Each change is labelled with the extension key.
pub fn compare_extensions<'a>(
    left: &Extensions<'a>,
    right: &Extensions<'a>,
) -> Option<ExtensionChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    for (key, left_value) in left {
        match right.get(key.value.as_str()) {
            Some(right_value) if right_value.value != left_value.value => changes.push(Change::new(
                ChangeType::Modified,
                key.value.as_str(),
                Some(left_value.value_node),
                Some(right_value.value_node),
                false,
            )),
            Some(_) => {}
            None => changes.push(Change::new(
                ChangeType::Removed,
                key.value.as_str(),
                Some(left_value.value_node),
                None,
                false,
            )),
        }
    }
    for (key, right_value) in right {
        if !left.contains_key(key.value.as_str()) {
            changes.push(Change::new(
                ChangeType::Added,
                key.value.as_str(),
                None,
                Some(right_value.value_node),
                false,
            ));
        }
    }

    non_empty(ExtensionChanges {
        property_changes: PropertyChanges::new(changes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use openapi_low::{BuildContext, extract_extensions};
    use openapi_yaml::parse;
    use std::collections::HashSet;

    #[test]
    fn test_extension_changes_never_break() {
        let left = parse("x-gone: 1\nx-same: [a, b]\nx-moved: {a: 1}\n").unwrap();
        let right = parse("x-same: [a, b]\nx-moved: {a: 2}\nx-new: true\n").unwrap();
        let ctx = BuildContext::default();

        let changes =
            compare_extensions(&extract_extensions(&left, &ctx), &extract_extensions(&right, &ctx))
                .unwrap();

        let summary: HashSet<_> = changes
            .all_changes()
            .into_iter()
            .map(|c| (c.change_type, c.property.as_str()))
            .collect();
        assert_eq!(
            summary,
            HashSet::from([
                (ChangeType::Removed, "x-gone"),
                (ChangeType::Modified, "x-moved"),
                (ChangeType::Added, "x-new"),
            ])
        );
        assert_eq!(changes.total_changes(), 3);
        assert_eq!(changes.total_breaking_changes(), 0);
    }

    #[test]
    fn test_equal_extensions() {
        let left = parse("x-a: 1\nx-b: two\n").unwrap();
        let right = parse("x-b: \"two\"\nx-a: 1\n").unwrap();
        let ctx = BuildContext::default();
        assert!(
            compare_extensions(&extract_extensions(&left, &ctx), &extract_extensions(&right, &ctx))
                .is_none()
        );
    }
}
