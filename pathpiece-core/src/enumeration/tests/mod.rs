
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Colour {
    Red,
    Green,
    Blue,
}

crate::bounded_enum_codec!(Colour {
    Colour::Red => "red",
    Colour::Green => "green",
    Colour::Blue => "Blue",
});

/// "a" is a strict prefix of "ab" and is declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Prefixed {
    A,
    Ab,
    B,
}

crate::bounded_enum_codec!(Prefixed {
    Prefixed::A => "a",
    Prefixed::Ab => "ab",
    Prefixed::B => "b",
});
