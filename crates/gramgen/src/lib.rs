//! # gramgen
//!
//! Support library for the GramGen grammar/AST code-generation toolkit.
//!
//! ## Architecture
//! - **gramcache**: memoization for generation passes (re-exported)
//! - **grameq**: structural equality for record types (re-exported)
//! - **holders**: records carrying generated source fragments
//!
//! The toolkit runs as a single-threaded batch pipeline; everything
//! here is synchronous and allocation-light.

#![warn(missing_docs)]

mod holders;
mod text;

pub use holders::{FieldAccessor, GeneratedFunction, GeneratedParser, TypeDeclaration};
pub use text::unescape;

pub use gramcache::{
    ArgValue, CallKey, FloatKey, Memo, MemoCache, MemoStats, SharedMemo, TryMemo,
};
pub use grameq::{impl_record, struct_eq, EqPolicy, Record};

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_memoized_accessor_generation() {
        // A generation pass asks for the same accessor for every use
        // site of a field; the holder is built once.
        let calls = Cell::new(0u32);
        let mut accessors = Memo::new(|key: &CallKey| {
            calls.set(calls.get() + 1);
            let field = match key.positional() {
                [ArgValue::Str(field)] => field.clone(),
                _ => String::new(),
            };
            let field_type = match key.get_named("field_type") {
                Some(ArgValue::Str(field_type)) => field_type.clone(),
                _ => String::new(),
            };
            FieldAccessor {
                func: GeneratedFunction::new(format!("get_{}", field))
                    .with_implementation(format!("return self.{};", field)),
                field,
                field_type,
            }
        });

        let key = CallKey::new().arg("name").named("field_type", "String").unwrap();
        let first = accessors.call(key.clone());
        let second = accessors.call(key);

        assert_eq!(calls.get(), 1);
        assert_eq!(struct_eq(&first, &second), Ok(true));
        assert_eq!(first.func.name, "get_name");
    }

    #[test]
    fn test_cache_store_used_directly() {
        // Passes that own their key type use the store without the
        // wrapper layer.
        let mut declarations: MemoCache<String, TypeDeclaration> = MemoCache::new();
        let mut built = 0u32;

        for _ in 0..2 {
            declarations.get_or_compute("Expr".to_string(), |type_name| {
                built += 1;
                TypeDeclaration {
                    type_name: type_name.clone(),
                    public_part: format!("pub struct {};", type_name),
                    private_part: String::new(),
                }
            });
        }

        assert_eq!(built, 1);
        assert_eq!(declarations.len(), 1);
    }

    #[test]
    fn test_unescaped_literal_in_parser_holder() {
        let rule = GeneratedParser {
            name: "plus".to_string(),
            spec: format!("token {}", unescape("\\+")),
            body: String::new(),
        };
        assert_eq!(rule.spec, "token +");
    }
}
