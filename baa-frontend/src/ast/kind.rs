//! Node kinds and flags for the Baa AST
//!
//! One variant per syntactic construct the grammar produces. Consumers
//! match exhaustively, so a grammar addition that grows this enum is
//! caught at build time in every phase that walks the tree.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Syntactic construct tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    // Top-level constructs
    Program, Function, Struct, Union, Typedef, Import,

    // Declarations
    VarDecl, ParamDecl, ArrayDecl, PointerDecl,

    // Statements
    Block, If, While, For, DoWhile, Switch, Case,
    Break, Continue, Return, ExprStmt,

    // Expressions
    BinaryOp, UnaryOp, Assignment, Call, Subscript, MemberAccess, Sizeof,

    // Primary expressions
    Identifier, Number, Float, StringLit, CharLit, VarRef,

    // Types
    TypeInt, TypeFloat, TypeChar, TypeVoid,
    TypeArray, TypePointer, TypeStruct, TypeUnion,
}

impl NodeKind {
    /// Check if this kind is a statement
    pub fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::Block
                | NodeKind::If
                | NodeKind::While
                | NodeKind::For
                | NodeKind::DoWhile
                | NodeKind::Switch
                | NodeKind::Case
                | NodeKind::Break
                | NodeKind::Continue
                | NodeKind::Return
                | NodeKind::ExprStmt
        )
    }

    /// Check if this kind is an expression (including primaries)
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::BinaryOp
                | NodeKind::UnaryOp
                | NodeKind::Assignment
                | NodeKind::Call
                | NodeKind::Subscript
                | NodeKind::MemberAccess
                | NodeKind::Sizeof
                | NodeKind::Identifier
                | NodeKind::Number
                | NodeKind::Float
                | NodeKind::StringLit
                | NodeKind::CharLit
                | NodeKind::VarRef
        )
    }

    /// Check if this kind is a type descriptor
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            NodeKind::TypeInt
                | NodeKind::TypeFloat
                | NodeKind::TypeChar
                | NodeKind::TypeVoid
                | NodeKind::TypeArray
                | NodeKind::TypePointer
                | NodeKind::TypeStruct
                | NodeKind::TypeUnion
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Program => "program",
            NodeKind::Function => "function",
            NodeKind::Struct => "struct definition",
            NodeKind::Union => "union definition",
            NodeKind::Typedef => "typedef",
            NodeKind::Import => "import",

            NodeKind::VarDecl => "variable declaration",
            NodeKind::ParamDecl => "parameter declaration",
            NodeKind::ArrayDecl => "array declaration",
            NodeKind::PointerDecl => "pointer declaration",

            NodeKind::Block => "block",
            NodeKind::If => "if statement",
            NodeKind::While => "while loop",
            NodeKind::For => "for loop",
            NodeKind::DoWhile => "do-while loop",
            NodeKind::Switch => "switch statement",
            NodeKind::Case => "case label",
            NodeKind::Break => "break statement",
            NodeKind::Continue => "continue statement",
            NodeKind::Return => "return statement",
            NodeKind::ExprStmt => "expression statement",

            NodeKind::BinaryOp => "binary operation",
            NodeKind::UnaryOp => "unary operation",
            NodeKind::Assignment => "assignment",
            NodeKind::Call => "function call",
            NodeKind::Subscript => "array subscript",
            NodeKind::MemberAccess => "member access",
            NodeKind::Sizeof => "sizeof",

            NodeKind::Identifier => "identifier",
            NodeKind::Number => "numeric literal",
            NodeKind::Float => "floating-point literal",
            NodeKind::StringLit => "string literal",
            NodeKind::CharLit => "character literal",
            NodeKind::VarRef => "variable reference",

            NodeKind::TypeInt => "int type",
            NodeKind::TypeFloat => "float type",
            NodeKind::TypeChar => "char type",
            NodeKind::TypeVoid => "void type",
            NodeKind::TypeArray => "array type",
            NodeKind::TypePointer => "pointer type",
            NodeKind::TypeStruct => "struct type",
            NodeKind::TypeUnion => "union type",
        };
        write!(f, "{}", name)
    }
}

bitflags! {
    /// Parse-time markers carried directly on a node.
    ///
    /// Storage-class and constancy qualifiers set through the attribute
    /// setters live in `NodeAttributes`, not here.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct NodeFlags: u8 {
        const SYSTEM_IMPORT = 1 << 0;
        const CONST = 1 << 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_categories() {
        assert!(NodeKind::While.is_statement());
        assert!(!NodeKind::While.is_expression());
        assert!(NodeKind::Call.is_expression());
        assert!(NodeKind::Number.is_expression());
        assert!(NodeKind::TypePointer.is_type());
        assert!(!NodeKind::Program.is_statement());
        assert!(!NodeKind::Program.is_expression());
        assert!(!NodeKind::Program.is_type());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", NodeKind::Program), "program");
        assert_eq!(format!("{}", NodeKind::VarDecl), "variable declaration");
        assert_eq!(format!("{}", NodeKind::DoWhile), "do-while loop");
        assert_eq!(format!("{}", NodeKind::TypeInt), "int type");
    }

    #[test]
    fn test_flags() {
        let mut flags = NodeFlags::default();
        assert!(flags.is_empty());

        flags.insert(NodeFlags::SYSTEM_IMPORT);
        assert!(flags.contains(NodeFlags::SYSTEM_IMPORT));
        assert!(!flags.contains(NodeFlags::CONST));

        flags.insert(NodeFlags::CONST);
        flags.remove(NodeFlags::SYSTEM_IMPORT);
        assert_eq!(flags, NodeFlags::CONST);
    }
}
