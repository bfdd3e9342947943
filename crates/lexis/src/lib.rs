pub mod interpreter;
pub mod parser;
pub mod types;

#[cfg(feature = "global-resolver")]
pub mod global;

pub use interpreter::{CoverageWarning, LoadError, Resolver};
pub use parser::{ParseError, SourceFormat};
pub use types::{
    NodeRef, PluralForm, PluralRange, PluralSet, TranslationNode, TranslationTree, UpperBound,
    Variables,
};

/// Creates a [`Variables`] list from name-value pairs.
///
/// Values are converted with `ToString`, so you can pass integers or strings
/// directly. Pairs keep the order they are written in.
///
/// # Example
///
/// ```
/// use lexis::vars;
///
/// let v = vars! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v.get("count"), Some("3"));
/// assert_eq!(v.get("name"), Some("Alice"));
/// ```
#[macro_export]
macro_rules! vars {
    {} => {
        $crate::Variables::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut vars = $crate::Variables::new();
            $(
                vars.insert($key, $value);
            )+
            vars
        }
    };
}
