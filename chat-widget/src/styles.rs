pub const CHAT_STYLES: &str = r#"
/* Theme variables */
:root,
[data-theme="light"] {
    --chat-bg: #f8fafc;
    --chat-header-bg: #ffffff;
    --bubble-bot-bg: #ffffff;
    --bubble-user-bg: #3b82f6;
    --text-primary: #0f172a;
    --text-secondary: #475569;
    --text-muted: #94a3b8;
    --border-color: #e2e8f0;
    --input-bg: #ffffff;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
}

[data-theme="dark"] {
    --chat-bg: #0f172a;
    --chat-header-bg: #1e293b;
    --bubble-bot-bg: #1e293b;
    --bubble-user-bg: #3b82f6;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --border-color: #334155;
    --input-bg: #0f172a;
    --accent-bg: #3b82f6;
    --accent-bg-hover: #2563eb;
}

body {
    margin: 0;
    background: var(--chat-bg);
    color: var(--text-primary);
    font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
    transition: background 0.2s, color 0.2s;
}

/* Chat Container */
.chat-container {
    display: flex;
    flex-direction: column;
    height: 100vh;
    max-width: 48rem;
    margin: 0 auto;
    background: var(--chat-bg);
    overflow: hidden;
}

/* Header */
.chat-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 0.75rem 1rem;
    background: var(--chat-header-bg);
    border-bottom: 1px solid var(--border-color);
    flex-shrink: 0;
}

.chat-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 600;
}

.chat-icon {
    font-size: 1.25rem;
}

.theme-switcher {
    width: 2rem;
    height: 2rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--chat-bg);
    border: 1px solid var(--border-color);
    border-radius: 8px;
    cursor: pointer;
}

/* Messages Scroll Area */
.messages-scroll-area {
    flex: 1;
    overflow-y: auto;
    overflow-x: hidden;
    padding: 1rem;
    scroll-behavior: smooth;
}

.messages-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

/* Empty State */
.empty-state {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 3rem 1rem;
    color: var(--text-muted);
    text-align: center;
}

.empty-icon {
    font-size: 3rem;
    margin-bottom: 1rem;
    opacity: 0.5;
}

.empty-state p {
    font-weight: 500;
    color: var(--text-secondary);
    margin: 0 0 0.25rem 0;
}

/* Messages */
.message {
    display: flex;
    gap: 0.75rem;
    max-width: 100%;
}

.message.user {
    flex-direction: row-reverse;
}

.avatar {
    width: 2rem;
    height: 2rem;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
    background: var(--bubble-bot-bg);
    color: var(--accent-bg);
    border: 1px solid var(--border-color);
}

.avatar svg {
    width: 1.25rem;
    height: 1.25rem;
}

.message-bubble {
    padding: 0.75rem 1rem;
    border-radius: 1rem;
    font-size: 0.9375rem;
    line-height: 1.5;
    white-space: pre-wrap;
    word-wrap: break-word;
    max-width: calc(100% - 3rem);
}

.message.user .message-bubble {
    background: var(--bubble-user-bg);
    color: white;
    border-bottom-right-radius: 0.25rem;
}

.message.bot .message-bubble {
    background: var(--bubble-bot-bg);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-bottom-left-radius: 0.25rem;
}

/* Typing Indicator */
.loading-indicator .message-bubble {
    display: flex;
    gap: 0.25rem;
    padding: 1rem;
}

.loading-indicator .dot {
    width: 0.5rem;
    height: 0.5rem;
    background: var(--text-muted);
    border-radius: 50%;
    animation: typing-bounce 1.4s infinite ease-in-out both;
}

.loading-indicator .dot:nth-child(1) { animation-delay: -0.32s; }
.loading-indicator .dot:nth-child(2) { animation-delay: -0.16s; }

@keyframes typing-bounce {
    0%, 80%, 100% { transform: scale(0); }
    40% { transform: scale(1); }
}

/* Chat Input Area */
.chat-input-area {
    padding: 0.75rem 1rem;
    background: var(--chat-header-bg);
    border-top: 1px solid var(--border-color);
    flex-shrink: 0;
}

.input-wrapper {
    display: flex;
    gap: 0.5rem;
    align-items: center;
}

.chat-input {
    flex: 1;
    padding: 0.75rem 1rem;
    background: var(--input-bg);
    color: var(--text-primary);
    border: 1px solid var(--border-color);
    border-radius: 1.5rem;
    font-size: 0.9375rem;
    font-family: inherit;
    outline: none;
    transition: border-color 0.2s, box-shadow 0.2s;
}

.chat-input:focus {
    border-color: var(--accent-bg);
    box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.2);
}

.chat-input:disabled {
    opacity: 0.6;
}

.send-button {
    width: 2.75rem;
    height: 2.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    background: var(--accent-bg);
    color: white;
    border: none;
    border-radius: 50%;
    cursor: pointer;
    font-size: 1.25rem;
    transition: all 0.2s;
    flex-shrink: 0;
}

.send-button:hover:not(:disabled) {
    background: var(--accent-bg-hover);
    transform: scale(1.05);
}

.send-button:disabled {
    background: var(--border-color);
    color: var(--text-muted);
    cursor: not-allowed;
}

.send-button .spinner {
    animation: spin 1s linear infinite;
}

@keyframes spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}
"#;
