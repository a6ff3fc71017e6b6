mod fallback_orchestrator_test;
