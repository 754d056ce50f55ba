/// `zip!(a, b)` reads better than `a.into_iter().zip(b)` when both sides are long expressions.
macro_rules! zip {
    ($a:expr, $b:expr) => { IntoIterator::into_iter($a).zip($b) };
    ($a:expr, $b:expr, $c:expr) => { IntoIterator::into_iter($a).zip($b).zip($c).map(|((a, b), c)| (a, b, c)) };
}
