//! Closures and function decorators.

/// Returns a closure that adds `x` to its argument.
///
/// Each call captures its own `x`, so closures from different calls never
/// share state.
///
/// ```
/// use tour_demos::utils::closure::encloser;
///
/// let add_one = encloser(1);
/// let add_two = encloser(2);
/// assert_eq!(add_one(1), 2);
/// assert_eq!(add_two(1), 3);
/// ```
pub fn encloser(x: i64) -> impl Fn(i64) -> i64 {
    move |y| x + y
}

/// Greets `name` as plain text.
pub fn get_text(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Wraps the output of `func` in `<tag>...</tag>`.
pub fn tagged<F>(tag: &'static str, func: F) -> impl Fn(&str) -> String
where
    F: Fn(&str) -> String,
{
    move |name: &str| format!("<{tag}>{}</{tag}>", func(name))
}

/// Decorator wrapping a text function's output in an `<h1>` element.
///
/// ```
/// use tour_demos::utils::closure::{get_text, h1};
///
/// assert_eq!(h1(get_text)("Joe"), "<h1>Hello, Joe!</h1>");
/// assert_eq!(h1(h1(get_text))("Joe"), "<h1><h1>Hello, Joe!</h1></h1>");
/// ```
pub fn h1<F>(func: F) -> impl Fn(&str) -> String
where
    F: Fn(&str) -> String,
{
    tagged("h1", func)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tour_kit::decorate;

    #[decorate(h1)]
    fn decorated_text(name: &str) -> String {
        format!("Hello, {name}!")
    }

    #[decorate(h1)]
    #[decorate(h1)]
    fn twice_decorated_text(name: &str) -> String {
        format!("Hello, {name}!")
    }

    #[test]
    fn test_closures_are_independent_and_repeatable() {
        let closure1 = encloser(1);
        let closure2 = encloser(2);

        for _ in 0..3 {
            assert_eq!(closure1(1), 2);
            assert_eq!(closure2(1), 3);
        }
        assert_eq!(encloser(-5)(5), 0);
    }

    #[test]
    fn test_manual_decoration() {
        let get_text = h1(get_text);
        assert_eq!(get_text("Joe"), "<h1>Hello, Joe!</h1>");
        assert_eq!(get_text(""), "<h1>Hello, !</h1>");
    }

    #[test]
    fn test_declarative_decoration_matches_manual() {
        let manual = h1(get_text);
        for name in ["Joe", "Ann", "x y"] {
            assert_eq!(decorated_text(name), manual(name));
        }
    }

    #[test]
    fn test_decorators_compose() {
        assert_eq!(twice_decorated_text("Joe"), "<h1><h1>Hello, Joe!</h1></h1>");
        assert_eq!(h1(h1(get_text))("Joe"), twice_decorated_text("Joe"));
    }

    #[test]
    fn test_other_tags() {
        let em = tagged("em", get_text);
        assert_eq!(em("Joe"), "<em>Hello, Joe!</em>");
        assert_eq!(h1(em)("Joe"), "<h1><em>Hello, Joe!</em></h1>");
    }
}
