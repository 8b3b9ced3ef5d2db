use inkwell::{
    values::{BasicMetadataValueEnum, FloatValue},
    FloatPredicate,
};

use crate::{ast::ast::Expr, errors::errors::CompileError};

use super::compiler::Compiler;

/// Generates LLVM IR for the given expression.
pub fn gen_expression<'a>(
    compiler: &Compiler<'a>,
    expression: &Expr,
) -> Result<FloatValue<'a>, CompileError> {
    match expression {
        Expr::Number(value) => Ok(compiler.context.f64_type().const_float(*value)),
        Expr::Variable(name) => {
            compiler
                .named_values
                .get(name)
                .copied()
                .ok_or_else(|| CompileError::UnknownVariable { name: name.clone() })
        }
        Expr::Binary { op, lhs, rhs } => {
            let lhs = gen_expression(compiler, lhs)?;
            let rhs = gen_expression(compiler, rhs)?;

            match op {
                '+' => Ok(compiler
                    .builder
                    .build_float_add(lhs, rhs, "addtmp")
                    .unwrap()),
                '-' => Ok(compiler
                    .builder
                    .build_float_sub(lhs, rhs, "subtmp")
                    .unwrap()),
                '*' => Ok(compiler
                    .builder
                    .build_float_mul(lhs, rhs, "multmp")
                    .unwrap()),
                '<' => {
                    let cmp = compiler
                        .builder
                        .build_float_compare(FloatPredicate::ULT, lhs, rhs, "cmptmp")
                        .unwrap();

                    // Widen the i1 comparison result back to f64 (0.0/1.0).
                    Ok(compiler
                        .builder
                        .build_unsigned_int_to_float(cmp, compiler.context.f64_type(), "booltmp")
                        .unwrap())
                }
                _ => Err(CompileError::InvalidOperator { op: *op }),
            }
        }
        Expr::Call { callee, args } => {
            let function =
                compiler
                    .module
                    .get_function(callee)
                    .ok_or_else(|| CompileError::UnknownFunction {
                        name: callee.clone(),
                    })?;

            if function.count_params() as usize != args.len() {
                return Err(CompileError::ArityMismatch {
                    expected: function.count_params() as usize,
                    received: args.len(),
                });
            }

            let mut arg_values: Vec<BasicMetadataValueEnum<'a>> = vec![];
            for arg in args.iter() {
                arg_values.push(gen_expression(compiler, arg)?.into());
            }

            Ok(compiler
                .builder
                .build_call(function, &arg_values, "calltmp")
                .unwrap()
                .try_as_basic_value()
                .left()
                .unwrap()
                .into_float_value())
        }
    }
}
