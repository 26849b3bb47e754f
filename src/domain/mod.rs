//! Domain Layer
//!
//! Pure logic over the host asset namespace, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Records stored as artifacts (WeaponData, Prefab, Material)
//! - `value_objects/` - Immutable value types (LogicalPath, AssetPath, ContentHash)
//! - `services/` - Path materialization and name availability
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Stateless services** - Every operation is a single pass over its inputs
//! 3. **Ports & Adapters** - All host access goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
