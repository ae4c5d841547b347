//! Logical port and operator names.
//!
//! A dispatch layer binds tensors to the operator by these names; they are
//! part of the operator's public contract and must not change.

/// Operator type of the forward pass.
pub const OP_TYPE: &str = "scatter";

/// Operator type of the gradient pass.
pub const GRAD_OP_TYPE: &str = "scatter_grad";

/// The source tensor read and selectively updated.
pub const REF: &str = "Ref";

/// Rank-1 tensor of first-axis coordinates into `Ref`.
pub const INDEX: &str = "Index";

/// Rows added into `Ref` at the positions named by `Index`.
pub const UPDATES: &str = "Updates";

/// Forward output.
pub const OUT: &str = "Out";

/// Suffix appended to a port name to name its gradient.
pub const GRAD_SUFFIX: &str = "@GRAD";

/// Operator description shown by dispatch tooling.
pub const DOC: &str = "\
Scatter Operator by selecting from the first axis,

Out = Ref
Out[Index] = Ref[Index] + Updates
";

/// Name of the gradient variable for port `name`.
///
/// ```
/// use scatter_op::ports::{grad_var_name, REF};
/// assert_eq!(grad_var_name(REF), "Ref@GRAD");
/// ```
pub fn grad_var_name(name: &str) -> String {
    format!("{name}{GRAD_SUFFIX}")
}

/// Input ports of the forward operator, in binding order.
pub fn forward_inputs() -> [&'static str; 3] {
    [REF, INDEX, UPDATES]
}

/// Output ports of the gradient operator, in return order (`dRef`, `dUpdates`).
pub fn grad_outputs() -> [String; 2] {
    [grad_var_name(REF), grad_var_name(UPDATES)]
}
