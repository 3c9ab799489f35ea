/// Unwrap a result or return an error if unsuccessful.
macro_rules! unwrap_or_return_err {
    ( $e:expr, $b:expr ) => {
        match $e {
            Ok(x) => x,
            Err(_) => return Err($b),
        }
    };
}

pub(crate) use unwrap_or_return_err;
