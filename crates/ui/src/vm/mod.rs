mod question_form_vm;

pub use question_form_vm::{QuestionFormVm, SubcategorySlotVm, build_question_form_vm};
