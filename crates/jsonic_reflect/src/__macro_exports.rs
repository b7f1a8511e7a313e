//! Items used by the code that `#[derive(Serializable)]` and
//! `impl_auto_register!` generate.

// -----------------------------------------------------------------------------
// auto_register

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::Serializable;
    use crate::registry::TypeRegistry;

    /// A catalogue entry: registers one type.
    pub struct __AutoRegisterFunc(pub fn(&mut TypeRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Provides the registration function of a catalogued type.
    pub trait __RegisterType {
        fn __register(registry: &mut TypeRegistry);
    }

    impl<T: Serializable> __RegisterType for T {
        #[inline]
        fn __register(registry: &mut TypeRegistry) {
            registry.register::<T>();
        }
    }

    /// Applies every catalogue entry, returns their number.
    pub fn __register_types(registry: &mut TypeRegistry) -> usize {
        let mut count = 0;
        for entry in inventory::iter::<__AutoRegisterFunc> {
            (entry.0)(registry);
            count += 1;
        }
        count
    }
}
