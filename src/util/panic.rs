/// Asserts that the provided block panics. When a message literal is provided, the panic payload
/// must also contain it.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert!(
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)).is_err(),
            "assertion failed to panic"
        );
    };
    ($run:block, $msg:literal) => {
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run)) {
            Ok(_) => panic!("assertion failed to panic, expected: {}", $msg),
            Err(payload) => {
                let text = payload
                    .downcast_ref::<String>()
                    .map(String::as_str)
                    .or_else(|| payload.downcast_ref::<&str>().copied())
                    .unwrap_or_default();
                assert!(
                    text.contains($msg),
                    "panic message {:?} doesn't contain {:?}",
                    text,
                    $msg
                );
            },
        }
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
