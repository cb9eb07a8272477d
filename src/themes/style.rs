/// Provide a per-widget override API for styles derived from the clay theme.
pub trait Styled {
    type Style: Clone;
    fn styled(self, style: Self::Style) -> Self;
}
