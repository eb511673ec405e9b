pub mod mmv;

#[macro_export]
macro_rules! backend_test_suite {
    (
        mod $modname:ident,
        backend = $backend:ty,
        modulus = $modulus:expr,
        dimension = $dimension:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use mmv_hal::{api::ModuleNew, layouts::Module};

            use once_cell::sync::Lazy;

            static MODULE: Lazy<Module<$backend>> =
                Lazy::new(|| Module::<$backend>::new($modulus, $dimension).unwrap());

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*MODULE);
                }
            )+
        }
    };
}

#[macro_export]
macro_rules! cross_backend_test_suite {
    (
        mod $modname:ident,
        backend_ref = $backend_ref:ty,
        backend_test = $backend_test:ty,
        modulus = $modulus:expr,
        dimension = $dimension:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use mmv_hal::{api::ModuleNew, layouts::Module};

            use once_cell::sync::Lazy;

            static MODULE_REF: Lazy<Module<$backend_ref>> =
                Lazy::new(|| Module::<$backend_ref>::new($modulus, $dimension).unwrap());
            static MODULE_TEST: Lazy<Module<$backend_test>> =
                Lazy::new(|| Module::<$backend_test>::new($modulus, $dimension).unwrap());

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*MODULE_REF, &*MODULE_TEST);
                }
            )+
        }
    };
}
