//! Log macro selection: `defmt` when the feature is on, `log` otherwise.
cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        #[allow(unused_imports)]
        pub(crate) use defmt::{info, trace, warn, debug, error};
    } else {
        #[allow(unused_imports)]
        pub(crate) use log::{info, trace, warn, debug, error};
    }
}
