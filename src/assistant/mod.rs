//! Scripted finance assistant
//!
//! Replies are looked up by exact question text in a fixed table per mode,
//! with one generic fallback. There is no inference of any kind.

mod conversation;

pub use conversation::{ChatMessage, Conversation, Role};

use crate::models::Mode;

/// Which script the assistant follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persona {
    Personal,
    Business,
}

impl Persona {
    /// Business mode gets the business script; anything else the personal one
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Business => Self::Business,
            Mode::Personal | Mode::None => Self::Personal,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Finance Assistant",
            Self::Business => "Business Assistant",
        }
    }

    pub fn greeting(&self) -> &'static str {
        match self {
            Self::Personal => PERSONAL_GREETING,
            Self::Business => BUSINESS_GREETING,
        }
    }

    pub fn suggested_questions(&self) -> Vec<&'static str> {
        self.script().iter().map(|(question, _)| *question).collect()
    }

    pub fn fallback(&self) -> &'static str {
        match self {
            Self::Personal => PERSONAL_FALLBACK,
            Self::Business => BUSINESS_FALLBACK,
        }
    }

    /// Canned reply for `question`; never empty
    pub fn reply(&self, question: &str) -> &'static str {
        self.script()
            .iter()
            .find(|(known, _)| *known == question)
            .map(|(_, answer)| *answer)
            .unwrap_or_else(|| self.fallback())
    }

    fn script(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Personal => PERSONAL_SCRIPT,
            Self::Business => BUSINESS_SCRIPT,
        }
    }
}

const PERSONAL_GREETING: &str = "Hi! I'm your personal finance assistant. I can help you understand your spending patterns, provide budgeting tips, and answer questions about your finances. How can I help you today?";

const PERSONAL_FALLBACK: &str = "I understand you're asking about your finances. Let me analyze your data and provide insights. Based on your spending patterns, I recommend setting clear budget limits and tracking your expenses daily for better financial health.";

const PERSONAL_SCRIPT: &[(&str, &str)] = &[
    (
        "How much did I spend this month?",
        "Based on your transactions, you've spent approximately $200 this month. Your main expenses were in Groceries ($150) and Entertainment ($50).",
    ),
    (
        "What's my top expense category?",
        "Your top expense category is Groceries at $150. This accounts for about 75% of your total spending this month.",
    ),
    (
        "How can I save more?",
        "Here are some tips to save more:\n\n1. 🎯 Set specific budget limits for each category\n2. 🍽️ Reduce dining out expenses\n3. 📊 Track daily expenses\n4. 💰 Try the 50/30/20 rule\n5. 🎉 Limit impulse purchases",
    ),
    (
        "Analyze my spending habits",
        "📊 **Spending Analysis:**\n\n• Total spent: $200\n• Categories: 2 active\n• Most expensive: Groceries (75%)\n• Savings rate: 96%\n\n✅ You're doing great! Your savings rate is excellent. Consider diversifying your budget categories for better tracking.",
    ),
];

const BUSINESS_GREETING: &str = "Hello! I'm your business intelligence assistant. I can help you analyze your business performance, identify growth opportunities, and provide strategic insights. What would you like to know?";

const BUSINESS_FALLBACK: &str = "I understand you're asking about your business. Based on your data, I can see positive trends in your revenue and profitability. Would you like me to provide specific insights on revenue, expenses, products, or growth strategies?";

const BUSINESS_SCRIPT: &[(&str, &str)] = &[
    (
        "What's my profit this month?",
        "Based on your current data:\n\n📊 **Monthly Summary**\n• Revenue: $10,500\n• Expenses: $3,900\n• Net Profit: $6,600\n\nYour profit margin is 62.8%, which is excellent! You're outperforming last month by 12.5%.",
    ),
    (
        "Which product is most profitable?",
        "📦 **Product Profitability Analysis:**\n\n1. **Premium Widget** - 49% margin, $49 profit/unit\n2. **Eco Bag** - 66% margin, $10 profit/unit\n\n💡 While Eco Bags have higher margins, Premium Widgets generate more absolute profit. Consider bundling them for maximum revenue.",
    ),
    (
        "How can I reduce costs?",
        "💰 **Cost Reduction Strategies:**\n\n1. **Inventory Management** - Reduce holding costs by 15%\n2. **Bulk Purchasing** - Negotiate 10-15% discounts\n3. **Automate Operations** - Cut labor costs by 20%\n4. **Review Subscriptions** - Eliminate unused services\n5. **Energy Efficiency** - Reduce utility bills\n\n📈 Implementing these could save you $800-1,200/month.",
    ),
    (
        "Analyze my business health",
        "🏥 **Business Health Report:**\n\n✅ **Strengths:**\n• Strong profit margins (62.8%)\n• Consistent revenue growth\n• Diverse income streams\n\n⚠️ **Areas to Watch:**\n• Inventory turnover could improve\n• Marketing ROI needs optimization\n\n📊 **Overall Score: 8.5/10**\n\nYour business is in excellent shape! Focus on scaling your best-performing products.",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_more_tips() {
        let reply = Persona::Personal.reply("How can I save more?");
        assert!(reply.starts_with("Here are some tips to save more:"));
        assert!(reply.contains("50/30/20 rule"));
    }

    #[test]
    fn test_unknown_question_gets_fallback() {
        assert_eq!(Persona::Personal.reply("what is a budget"), PERSONAL_FALLBACK);
        assert_eq!(Persona::Business.reply(""), BUSINESS_FALLBACK);
        assert!(!Persona::Personal.reply("anything").is_empty());
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Persona::Personal.reply("how can i save more?"), PERSONAL_FALLBACK);
        assert_eq!(Persona::Personal.reply("How can I save more? "), PERSONAL_FALLBACK);
    }

    #[test]
    fn test_scripts_are_separate() {
        assert_eq!(Persona::Personal.reply("How can I reduce costs?"), PERSONAL_FALLBACK);
        assert!(Persona::Business
            .reply("How can I reduce costs?")
            .contains("Cost Reduction Strategies"));
    }

    #[test]
    fn test_suggested_questions() {
        assert_eq!(Persona::Business.suggested_questions().len(), 4);
        assert_eq!(Persona::for_mode(Mode::Business), Persona::Business);
        assert_eq!(Persona::for_mode(Mode::None), Persona::Personal);
    }
}
