pub mod mediadex_core;
