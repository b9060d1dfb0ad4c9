//! Lookups over the ordered option registry.

use super::types::{Direction, OptionDescriptor};

pub fn find_by_value<'a, V: PartialEq>(
    options: &'a [OptionDescriptor<V>],
    value: &V,
) -> Option<&'a OptionDescriptor<V>> {
    options.iter().find(|option| option.value == *value)
}

/// First enabled option whose label starts with `query`, ignoring case.
///
/// An empty query never matches.
pub fn find_by_typeahead<'a, V>(
    options: &'a [OptionDescriptor<V>],
    query: &str,
) -> Option<&'a OptionDescriptor<V>> {
    if query.is_empty() {
        return None;
    }
    let query = query.to_lowercase();
    options
        .iter()
        .find(|option| !option.disabled && option.label.to_lowercase().starts_with(&query))
}

/// Resolve a keyboard navigation step to the value it lands on.
///
/// Disabled options are skipped. From no current option, `Next` lands on the
/// first enabled option and `Previous` on the last. At either end, the
/// current option is kept unless `wrap` is set.
pub fn step<V: Clone + PartialEq>(
    options: &[OptionDescriptor<V>],
    current: Option<&V>,
    direction: Direction,
    wrap: bool,
) -> Option<V> {
    let enabled: Vec<usize> = options
        .iter()
        .enumerate()
        .filter(|(_, option)| !option.disabled)
        .map(|(index, _)| index)
        .collect();
    let first = *enabled.first()?;
    let last = *enabled.last()?;
    let position = current.and_then(|value| options.iter().position(|o| o.value == *value));

    let index = match (direction, position) {
        (Direction::First, _) | (Direction::Next, None) => first,
        (Direction::Last, _) | (Direction::Previous, None) => last,
        (Direction::Next, Some(at)) => match enabled.iter().find(|&&i| i > at) {
            Some(&i) => i,
            None if wrap => first,
            None => at,
        },
        (Direction::Previous, Some(at)) => match enabled.iter().rev().find(|&&i| i < at) {
            Some(&i) => i,
            None if wrap => last,
            None => at,
        },
    };

    Some(options[index].value.clone())
}
