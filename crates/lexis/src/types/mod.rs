mod plural_set;
mod range;
mod tree;
mod variables;

pub use plural_set::{PluralForm, PluralSet};
pub use range::{PluralRange, UpperBound};
pub use tree::{NodeRef, TranslationNode, TranslationTree};
pub use variables::Variables;
