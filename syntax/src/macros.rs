// Shorthand for combine's `parser!` with our stream bounds filled in.
// Every parser in this crate works on `&str` input with `char` tokens.

macro_rules! p (
    ($name:ident( $($arg: ident :  $arg_type: ty),* ) -> $ret:ty, $code:expr) => (
        combine::parser!{
            pub fn $name['a, I]($($arg : $arg_type),*)(I) -> $ret
                where
                [I: combine::stream::RangeStream<
                 Range = &'a str,
                 Token = char>,
                 I::Error: combine::ParseError<char, &'a str, <I as combine::stream::StreamOnce>::Position>,
            ]            {
                $code
            }
        }
    );
);

// a parser that wraps another parser and returns its output.
macro_rules! wrapper {
    ($name:ident($delegate: ident), $code:expr) => (
        combine::parser!{
            pub fn $name['a, I, P]($delegate: P)(I) -> P::Output
                where
                [I: combine::stream::RangeStream<
                 Range = &'a str,
                 Token = char>,
                 I::Error: combine::ParseError<char, &'a str, <I as combine::stream::StreamOnce>::Position>,
                 P: combine::Parser<I>,
            ]            {
                $code
            }
        }
    );
}

// a parser that applies another parser repeatedly and collects its outputs.
macro_rules! repeater {
    ($name:ident($delegate: ident), $code:expr) => (
        combine::parser!{
            pub fn $name['a, I, P]($delegate: P)(I) -> Vec<P::Output>
                where
                [I: combine::stream::RangeStream<
                 Range = &'a str,
                 Token = char>,
                 I::Error: combine::ParseError<char, &'a str, <I as combine::stream::StreamOnce>::Position>,
                 P: combine::Parser<I>,
            ]            {
                $code
            }
        }
    );
}
