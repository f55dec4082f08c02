//! Workspace-level integration tests for FibSeq live under `tests/`.
