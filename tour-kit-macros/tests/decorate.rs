use tour_kit_macros::decorate;

fn bold<F>(func: F) -> impl Fn(&str) -> String
where
    F: Fn(&str) -> String,
{
    move |name: &str| format!("**{}**", func(name))
}

fn italic<F>(func: F) -> impl Fn(&str) -> String
where
    F: Fn(&str) -> String,
{
    move |name: &str| format!("_{}_", func(name))
}

fn greet(name: &str) -> String {
    format!("Hi {name}")
}

#[decorate(bold)]
fn bold_greet(name: &str) -> String {
    format!("Hi {name}")
}

#[decorate(bold)]
#[decorate(italic)]
fn bold_italic_greet(name: &str) -> String {
    format!("Hi {name}")
}

fn times_ten<F>(func: F) -> impl Fn(i32, i32) -> i32
where
    F: Fn(i32, i32) -> i32,
{
    move |a, b| func(a, b) * 10
}

#[decorate(times_ten)]
fn scaled_sum(a: i32, b: i32) -> i32 {
    a + b
}

#[decorate(bold)]
fn with_mut_param(mut name: &str) -> String {
    if name.is_empty() {
        name = "nobody";
    }
    name.to_string()
}

mod nested {
    use tour_kit_macros::decorate;

    fn shout<F>(func: F) -> impl Fn(&str) -> String
    where
        F: Fn(&str) -> String,
    {
        move |text: &str| func(text).to_uppercase()
    }

    /// Docs stay on the decorated function
    #[decorate(shout)]
    pub fn echo(text: &str) -> String {
        text.to_string()
    }
}

#[test]
fn test_declarative_matches_manual_composition() {
    let manual = bold(greet);
    assert_eq!(bold_greet("Joe"), manual("Joe"));
    assert_eq!(bold_greet("Joe"), "**Hi Joe**");
}

#[test]
fn test_stacked_attributes_apply_innermost_first() {
    let manual = bold(italic(greet));
    assert_eq!(bold_italic_greet("Joe"), manual("Joe"));
    assert_eq!(bold_italic_greet("Joe"), "**_Hi Joe_**");
}

#[test]
fn test_decorator_with_several_arguments() {
    assert_eq!(scaled_sum(1, 2), 30);
    assert_eq!(scaled_sum(-4, 4), 0);
}

#[test]
fn test_mut_parameter_stays_on_inner_body() {
    assert_eq!(with_mut_param(""), "**nobody**");
    assert_eq!(with_mut_param("Ann"), "**Ann**");
}

#[test]
fn test_visibility_is_preserved() {
    assert_eq!(nested::echo("quiet"), "QUIET");
}
