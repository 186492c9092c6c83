//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod committee;
pub mod committee_payment;
pub mod expense;
pub mod loan;
pub mod monthly_income;
pub mod payment_method;
pub mod person;

// Re-export specific types to avoid conflicts
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use committee::{Column as CommitteeColumn, Entity as Committee, Model as CommitteeModel};
pub use committee_payment::{
    Column as CommitteePaymentColumn, Entity as CommitteePayment, Model as CommitteePaymentModel,
};
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use loan::{Column as LoanColumn, Entity as Loan, Model as LoanModel};
pub use monthly_income::{
    Column as MonthlyIncomeColumn, Entity as MonthlyIncome, Model as MonthlyIncomeModel,
};
pub use payment_method::{
    Column as PaymentMethodColumn, Entity as PaymentMethod, Model as PaymentMethodModel,
};
pub use person::{Column as PersonColumn, Entity as Person, Model as PersonModel};
