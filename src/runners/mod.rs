mod tokio_postgres;

pub use self::in_memory_test::{
    CallKind, InMemoryTestResponseBuilder, InMemoryTestRunner, RecordedCall,
};
pub use self::tokio_postgres::TokioPostgresRunner;
