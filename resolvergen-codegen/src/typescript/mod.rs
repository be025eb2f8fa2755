//! TypeScript code generation modules.

pub mod defaults;
pub mod enums;
pub mod header;
pub mod inputs;
pub mod namespaces;
pub mod printer;
pub mod resolvers;

pub use defaults::DefaultResolverGenerator;
pub use enums::EnumGenerator;
pub use header::HeaderGenerator;
pub use inputs::InputGenerator;
pub use namespaces::NamespaceGenerator;
pub use printer::TypePrinter;
pub use resolvers::{ResolverContract, ResolverGenerator};
