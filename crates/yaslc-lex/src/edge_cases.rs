//! Edge case tests for yaslc-lex
