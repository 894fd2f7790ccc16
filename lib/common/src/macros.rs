/// Expand `$body` once per listed scalar type, with `$Alias` naming that type inside it.
///
/// Meant for trait impls which read the same for `f32` and `f64`; reach for a blanket impl
/// instead whenever the trait bounds allow one.
#[macro_export]
macro_rules! for_each_real {
    ($Alias:ident in [$($Real:ty),+ $(,)?] => $body:item) => {
        $(
            const _: () = {
                type $Alias = $Real;
                $body
            };
        )+
    };
}
