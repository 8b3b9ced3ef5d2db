//! Main code generation module.
//!
//! This module contains the core Compiler structure and implements the
//! lowering pipeline from AST to LLVM IR. It manages the LLVM module and
//! builder, the per-function variable environment, and the top-level driver
//! that parses and lowers whole inputs with error recovery.

use std::collections::HashMap;

use inkwell::{
    builder::Builder,
    context::Context,
    module::{Linkage, Module},
    types::BasicMetadataTypeEnum,
    values::{FloatValue, FunctionValue},
};

use crate::{
    ast::ast::{Function, Item, Prototype},
    errors::errors::CompileError,
    lexer::lexer::tokenize,
    parser::{item::parse_item, parser::Parser},
};

use super::expr::gen_expression;

/// The code generator state for one compilation session.
///
/// This structure manages:
/// - The LLVM context, module, and builder
/// - The per-function environment mapping variable names to values
///
/// The module is the session's append-only registry of declared and defined
/// functions; the environment is wholly replaced at the start of every
/// function's lowering.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the LLVM context
pub struct Compiler<'a> {
    /// Reference to the LLVM context
    pub context: &'a Context,
    /// The LLVM module being built
    pub module: Module<'a>,
    /// The LLVM IR builder
    pub builder: Builder<'a>,
    /// Map of variable names to their values in the current function
    pub named_values: HashMap<String, FloatValue<'a>>,
}

impl<'a> Compiler<'a> {
    pub fn new(context: &'a Context, module_name: &str) -> Self {
        Compiler {
            module: context.create_module(module_name),
            builder: context.create_builder(),
            context,
            named_values: HashMap::new(),
        }
    }

    /// Declares a function for the prototype in the module, with every
    /// parameter and the return value typed `f64`.
    ///
    /// If a function of that name already exists it is reused, so repeated
    /// `extern` declarations are idempotent and a declaration can later be
    /// filled in by a definition.
    pub fn gen_prototype(&self, proto: &Prototype) -> FunctionValue<'a> {
        if let Some(function) = self.module.get_function(&proto.name) {
            return function;
        }

        let f64_type = self.context.f64_type();
        let param_types: Vec<BasicMetadataTypeEnum> =
            vec![f64_type.into(); proto.params.len()];
        let fn_type = f64_type.fn_type(&param_types, false);

        let function = self
            .module
            .add_function(&proto.name, fn_type, Some(Linkage::External));

        for (param, name) in function.get_param_iter().zip(proto.params.iter()) {
            param.into_float_value().set_name(name);
        }

        function
    }

    /// Lowers a function definition, or an anonymous top-level expression
    /// wrapped as one.
    ///
    /// The variable environment is reset to the definition's own parameters
    /// before the body is lowered. On any failure the partially built
    /// function is deleted from the module, so no partial artifact remains
    /// visible.
    pub fn gen_function(
        &mut self,
        function_ast: &Function,
    ) -> Result<FunctionValue<'a>, CompileError> {
        let proto = &function_ast.proto;
        let function = self.gen_prototype(proto);

        if function.count_basic_blocks() > 0 {
            return Err(CompileError::Redefinition {
                function: proto.name.clone(),
            });
        }

        let entry = self.context.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        // Parameters are re-named from this definition's prototype, so a
        // body can refer to its own parameter names even when the function
        // was first declared via `extern` under different ones.
        self.named_values.clear();
        for (param, name) in function.get_param_iter().zip(proto.params.iter()) {
            let param = param.into_float_value();
            param.set_name(name);
            self.named_values.insert(name.clone(), param);
        }

        let body = match gen_expression(self, &function_ast.body) {
            Ok(value) => value,
            Err(error) => {
                unsafe { function.delete() };
                return Err(error);
            }
        };

        self.builder.build_return(Some(&body)).unwrap();

        if !function.verify(true) {
            unsafe { function.delete() };
            return Err(CompileError::FunctionVerification {
                function: proto.name.clone(),
            });
        }

        Ok(function)
    }

    /// Lowers one top-level unit.
    pub fn compile_item(&mut self, item: &Item) -> Result<FunctionValue<'a>, CompileError> {
        match item {
            Item::Definition(function) | Item::Expression(function) => self.gen_function(function),
            Item::Extern(proto) => Ok(self.gen_prototype(proto)),
        }
    }
}

/// Parses and lowers every top-level unit in `source` against the given
/// compilation session.
///
/// A failed unit is discarded and parsing resumes after skipping exactly one
/// token, so one malformed definition or expression never poisons the units
/// that follow it. Returns the successfully lowered functions and all
/// diagnostics, each in input order.
pub fn compile_source<'a>(
    source: &str,
    compiler: &mut Compiler<'a>,
) -> (Vec<FunctionValue<'a>>, Vec<CompileError>) {
    let mut parser = Parser::new(tokenize(source));
    let mut functions = vec![];
    let mut diagnostics = vec![];

    loop {
        match parse_item(&mut parser) {
            Ok(None) => break,
            Ok(Some(item)) => match compiler.compile_item(&item) {
                Ok(function) => functions.push(function),
                Err(error) => diagnostics.push(error),
            },
            Err(error) => {
                diagnostics.push(error);
                parser.advance();
            }
        }
    }

    (functions, diagnostics)
}
