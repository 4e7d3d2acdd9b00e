/// Evaluates to `Ok(())` when `$assert` holds, otherwise logs and evaluates
/// to `Err($err)`. Any trailing tokens are forwarded to `log!`.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code = $err;
                ::soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
        if ($assert) {
            Ok(())
        } else {
            let error_code = $err;
            ::soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
            ::soroban_sdk::log!($env, $($arg)*);
            Err(error_code)
        }
        }
    };
}

#[macro_export]
macro_rules! safe_increment {
    ($struct:expr, $value:expr) => {{
        $struct = $struct.checked_add($value).ok_or($crate::error::ErrorCode::MathError)?
    }};
}

#[macro_export]
macro_rules! safe_decrement {
    ($struct:expr, $value:expr) => {{
        $struct = $struct.checked_sub($value).ok_or($crate::error::ErrorCode::MathError)?
    }};
}
