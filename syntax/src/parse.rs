use anyhow::Result;

#[derive(Debug, thiserror::Error)]
#[error("ParseError on line {line_no} '{line}': {msg}")]
pub struct Error {
    msg: String,
    line_no: usize,
    line: String,
}

pub fn parse(text: &str) -> Result<Vec<crate::ast::Item<'_>>> {
    use combine::EasyParser;
    taskfile::items()
        .easy_parse(text)
        .map(|(items, _remainder)| {
            // `items` only succeeds at eof, so the remainder is always empty.
            items
        })
        .map_err(|e| {
            let pos = e.position.translate_position(text);
            // isolate the line in question:
            let before = &text[0..pos];
            let after = &text[pos..text.len()];
            let line_no = before.matches('\n').count() + 1;
            let prefix = before.rsplit('\n').next().unwrap_or_default();
            let suffix = after.split('\n').next().unwrap_or_default();
            let line = [prefix, suffix].concat();
            // since converting combine's errors is a lifetime nightmare,
            // we just stringify the error before returning it.
            Error {
                line_no,
                line,
                msg: format!("{}", e),
            }
            .into()
        })
}

pub mod prelude {
    pub use combine::parser::char::{char, string};
    pub use combine::parser::range::recognize;
    pub use combine::*;
}

pub mod util {

    use super::prelude::*;
    use combine::parser::char::{letter, space};

    p! {
        ident_start() -> char, {
            char('_').or(letter())
        }
    }

    p! {
        ident_char() -> char, {
            satisfy(|c: char| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
        }
    }

    // task names are also used as file and target names, so we allow '-' and '.' after
    // the first char.
    p! {
        ident() -> &'a str, {
            recognize(ident_start().and(skip_many(ident_char())))
        }
    }

    // runs to end of line, but leaves the newline for `whitespace` or `eol`:
    p! {
        comment() -> &'a str, {
            recognize(
                char('#')
                .and(skip_many(none_of("\n".chars())))
            )
        }
    }

    p! {
        whitespace() -> (), {
            skip_many1(
                space().map(|_| ()).or(comment().map(|_| ()))
            )
        }
    }

    wrapper! {
        lex(parser), {
            optional(whitespace()).with(parser).skip(optional(whitespace()))
        }
    }

    p! {
        line_internal_whitespace() -> (), {
            skip_many1(satisfy(|c: char| c.is_whitespace() && c != '\n'))
        }
    }

    wrapper! {
        lex_inline(parser), {
            optional(line_internal_whitespace())
                .with(parser)
                .skip(optional(line_internal_whitespace()))
        }
    }

    // parser, followed by *mandatory* line-internal whitespace
    wrapper! {
        lex_word_inline(parser), {
            optional(line_internal_whitespace()).with(parser).skip(line_internal_whitespace())
        }
    }

    wrapper! {
        braces(parser), {
            char('{').with(parser).skip(char('}'))
        }
    }

    // end of a line, with an optional trailing comment:
    p! {
        eol() -> (), {
            optional(comment()).with(eof().or(char('\n').map(|_| ())))
        }
    }

    repeater! {
        comma_delim(parser), {
            sep_by1(lex(parser), char(','))
        }
    }

}

mod task {
    use super::prelude::*;
    use super::util::{
        braces, eol, ident, lex_inline, lex_word_inline, line_internal_whitespace, whitespace,
    };
    use crate::ast::TaskBlock;

    // `{ a b \n c }`; deps can span lines and contain comments.
    p! {
        braced_deps() -> Vec<&'a str>, {
            braces(
                optional(whitespace())
                    .with(many(ident().skip(optional(whitespace()))))
            )
        }
    }

    p! {
        inline_deps() -> Vec<&'a str>, {
            many1(lex_inline(ident()))
        }
    }

    p! {
        deps() -> Vec<&'a str>, {
            braced_deps().or(inline_deps())
        }
    }

    p! {
        task() -> TaskBlock<'a>, {
            lex_word_inline(string("task"))
                .with(ident())
                .and(optional(attempt(lex_inline(char('<'))).with(deps())))
                .skip(optional(line_internal_whitespace()))
                .skip(eol())
                .map(|(name, deps)| TaskBlock {
                    name,
                    deps: deps.unwrap_or_default(),
                })
        }
    }

}

mod plan {
    use super::prelude::*;
    use super::util::{braces, comma_delim, ident, lex_word_inline, line_internal_whitespace, whitespace};
    use crate::ast::Plan;

    p! {
        reach() -> Vec<&'a str>, {
            string("reach")
                .skip(line_internal_whitespace())
                .with(comma_delim(ident()))
        }
    }

    p! {
        plan() -> Plan<'a>, {
            lex_word_inline(string("plan")).with(ident())
                .skip(optional(whitespace()))
                .and(braces(
                    optional(whitespace()).with(many(reach().skip(optional(whitespace()))))
                ))
                .map(|(name, reaches): (&'a str, Vec<Vec<&'a str>>)| Plan {
                    name,
                    goals: reaches.into_iter().flatten().collect(),
                })
        }
    }

}

mod taskfile {
    use super::{plan::plan, prelude::*, task::task, util::whitespace};
    use crate::ast::Item;

    p! {
        item() -> Item<'a>, {
            choice!(
                task().map(Item::Task),
                plan().map(Item::Plan)
            )
        }
    }

    p! {
        items() -> Vec<Item<'a>>, {
            optional(whitespace())
                .with(many(item().skip(optional(whitespace()))))
                .skip(eof())
        }
    }
}
